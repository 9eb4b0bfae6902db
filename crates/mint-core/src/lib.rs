// crates/mint-core/src/lib.rs
//
// mint-core: Core types, traits, and wire messages for the mint module.
//
// This is the leaf crate of the module proper (only `mint-math` sits below
// it). It defines the persisted records (`Params`, `Minter`), their
// validation rules, the audit event schema, the protobuf wire messages, the
// error type, and the narrow adapter traits through which the module talks
// to staking, bank, accounts, events and its own KV namespace.

pub mod coin;
pub mod error;
pub mod event;
pub mod genesis;
pub mod minter;
pub mod params;
pub mod proto;
pub mod traits;

/// Name of the mint module and of its module account.
pub const MODULE_NAME: &str = "mint";

/// Module account that accumulates protocol rewards, including minted coins.
pub const FEE_COLLECTOR_NAME: &str = "fee_collector";

/// Module whose address is the default authority for parameter updates.
pub const GOV_MODULE_NAME: &str = "gov";

/// Permission the mint module account needs to create coins.
pub const MINTER_PERMISSION: &str = "minter";

// Re-export key types for ergonomic access from downstream crates.
pub use coin::{validate_denom, Coin};
pub use error::MintError;
pub use event::{Event, EventAttribute};
pub use genesis::GenesisState;
pub use minter::Minter;
pub use params::Params;
pub use traits::{
    AccountKeeper, BankKeeper, EpochHooks, EventSink, KvStore, KvWrite, ModuleAccount,
    StakingKeeper,
};

pub use mint_math::{Dec, Int, MathError};
