// crates/mint-store/src/memory.rs
//
// In-memory `KvStore` used by tests and ephemeral local runs.

use std::collections::BTreeMap;

use mint_core::error::MintError;
use mint_core::traits::{KvStore, KvWrite};

/// Ordered in-memory key/value map.
#[derive(Debug, Clone, Default)]
pub struct MemKvStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemKvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, MintError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), MintError> {
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), MintError> {
        self.entries.remove(key);
        Ok(())
    }

    fn write_batch(&mut self, batch: Vec<KvWrite>) -> Result<(), MintError> {
        for (key, value) in batch {
            match value {
                Some(v) => self.entries.insert(key, v),
                None => self.entries.remove(&key),
            };
        }
        Ok(())
    }
}
