// crates/mint-store/src/cache.rs
//
// Write-buffering overlay over any `KvStore`.
//
// Reads fall through to the parent unless the key was written in this
// cache. Nothing reaches the parent until `commit`, which hands the whole
// buffer to the parent as one batch; dropping the cache discards it.

use std::collections::BTreeMap;

use mint_core::error::MintError;
use mint_core::traits::{KvStore, KvWrite};

/// Buffered writes over a borrowed parent store.
pub struct CacheKv<'a> {
    parent: &'a mut dyn KvStore,
    /// `None` marks a buffered delete.
    writes: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl<'a> CacheKv<'a> {
    pub fn new(parent: &'a mut dyn KvStore) -> Self {
        Self {
            parent,
            writes: BTreeMap::new(),
        }
    }

    /// Flush buffered writes to the parent as a single batch.
    pub fn commit(self) -> Result<(), MintError> {
        let Self { parent, writes } = self;
        if writes.is_empty() {
            return Ok(());
        }
        parent.write_batch(writes.into_iter().collect())
    }
}

impl KvStore for CacheKv<'_> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, MintError> {
        match self.writes.get(key) {
            Some(buffered) => Ok(buffered.clone()),
            None => self.parent.get(key),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), MintError> {
        self.writes.insert(key.to_vec(), Some(value.to_vec()));
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), MintError> {
        self.writes.insert(key.to_vec(), None);
        Ok(())
    }

    fn write_batch(&mut self, batch: Vec<KvWrite>) -> Result<(), MintError> {
        self.writes.extend(batch);
        Ok(())
    }
}
