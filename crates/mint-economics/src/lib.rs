// crates/mint-economics/src/lib.rs
//
// mint-economics: inflation control and the mint cycle for the mint module.
//
// Two provisioning regimes share one keeper:
//   - Block regime: every block, the inflation rate moves toward the
//     bonded-ratio goal and 1/blocks_per_year of the annual provisions is
//     minted to the fee collector.
//   - Epoch regime: at the end of the configured epoch, a fixed epoch
//     provision is minted; it is multiplied by the reduction factor every
//     `reduction_period_in_epochs` epochs.
//
// All amounts are integers of the mint denom; all rates are 18-digit `Dec`.

pub mod controller;
pub mod epoch;
pub mod keeper;
pub mod memory;
pub mod msg_server;
pub mod query;

// Re-export key types for ergonomic access from downstream crates.
pub use controller::{
    block_provision, next_annual_provisions, next_inflation_rate, BondedRatioController,
    InflationCalculator,
};
pub use epoch::{epoch_provision, next_epoch_provisions};
pub use keeper::{MintAdapters, MintKeeper, MintOutcome, ProvisionSupply};
pub use memory::{InMemoryAccounts, InMemoryBank, RecordingEventSink, StaticStaking};
pub use msg_server::MsgServer;
pub use query::QueryServer;
