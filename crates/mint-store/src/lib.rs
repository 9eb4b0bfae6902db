// crates/mint-store/src/lib.rs
//
// mint-store: Storage layer for the mint module.
//
// Provides two `KvStore` backends (an in-memory BTreeMap and RocksDB), a
// write-buffering `CacheKv` that makes each mint cycle all-or-nothing, and
// `MintState`, the typed accessor for the module's three persisted records.

pub mod cache;
pub mod memory;
pub mod rocks;
pub mod state;

// Re-export key types for ergonomic access from downstream crates.
pub use cache::CacheKv;
pub use memory::MemKvStore;
pub use rocks::RocksKvStore;
pub use state::{MintState, LAST_REDUCTION_EPOCH_KEY, MINTER_KEY, PARAMS_KEY};
