// crates/mint-core/src/traits.rs
//
// Narrow interfaces to the module's collaborators.
//
// The keeper receives one implementation of each adapter at construction
// and never discovers collaborators on its own. Adapters take `&self`;
// implementations supply their own interior mutability.

use serde::{Deserialize, Serialize};

use crate::coin::Coin;
use crate::error::MintError;
use crate::event::Event;
use mint_math::{Dec, Int};

/// Read access to staking state.
///
/// Implemented by the host chain's staking module.
pub trait StakingKeeper: Send + Sync {
    /// Fraction of the staking token supply that is bonded, in `[0, 1]`.
    fn bonded_ratio(&self) -> Result<Dec, MintError>;

    /// Total supply of the staking token.
    fn staking_token_supply(&self) -> Result<Int, MintError>;
}

/// Coin creation and module-to-module transfer.
///
/// Implemented by the host chain's bank module.
pub trait BankKeeper: Send + Sync {
    /// Total supply of a denomination.
    fn get_supply(&self, denom: &str) -> Result<Int, MintError>;

    /// Create `coins` in the account of `module`.
    fn mint_coins(&self, module: &str, coins: &[Coin]) -> Result<(), MintError>;

    /// Move `coins` from one module account to another.
    fn send_coins_from_module_to_module(
        &self,
        sender: &str,
        recipient: &str,
        coins: &[Coin],
    ) -> Result<(), MintError>;
}

/// A module-owned account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleAccount {
    pub name: String,
    pub address: String,
    pub permissions: Vec<String>,
}

/// Module account registry.
///
/// Implemented by the host chain's auth module.
pub trait AccountKeeper: Send + Sync {
    /// Deterministic address of a module account.
    fn get_module_address(&self, name: &str) -> String;

    /// Fetch a module account, creating it if it does not exist yet.
    fn get_module_account(&self, name: &str) -> Result<ModuleAccount, MintError>;
}

/// Destination for audit events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &Event) -> Result<(), MintError>;
}

/// Hooks invoked by the epoch subsystem.
///
/// Implemented by the mint keeper.
pub trait EpochHooks {
    /// Called before an epoch starts.
    fn before_epoch_start(&mut self, epoch_identifier: &str, epoch_number: i64) -> Result<(), MintError>;

    /// Called after an epoch ends.
    fn after_epoch_end(&mut self, epoch_identifier: &str, epoch_number: i64) -> Result<(), MintError>;
}

/// One staged mutation: `Some(value)` writes the key, `None` deletes it.
pub type KvWrite = (Vec<u8>, Option<Vec<u8>>);

/// Byte-oriented key/value namespace owned by the module.
///
/// Implemented by mint-store (in-memory, RocksDB, and write-buffering cache).
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, MintError>;

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), MintError>;

    fn delete(&mut self, key: &[u8]) -> Result<(), MintError>;

    /// Apply every write in `batch` or none of them.
    fn write_batch(&mut self, batch: Vec<KvWrite>) -> Result<(), MintError>;

    fn has(&self, key: &[u8]) -> Result<bool, MintError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: KvStore + ?Sized> KvStore for &mut T {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, MintError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), MintError> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), MintError> {
        (**self).delete(key)
    }

    fn write_batch(&mut self, batch: Vec<KvWrite>) -> Result<(), MintError> {
        (**self).write_batch(batch)
    }
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, MintError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), MintError> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), MintError> {
        (**self).delete(key)
    }

    fn write_batch(&mut self, batch: Vec<KvWrite>) -> Result<(), MintError> {
        (**self).write_batch(batch)
    }
}
