// crates/mint-store/src/rocks.rs
//
// RocksDB-backed persistent `KvStore` for the mint module.
//
// Every key is namespaced under the module prefix `mint/` so the database
// can be shared with other modules of the host chain. The three records the
// module owns live at `mint/0x00`, `mint/0x01` and `mint/0x02`.
// Batches go through a single `WriteBatch`, so a cycle lands whole or not
// at all.

use rocksdb::{DBWithThreadMode, MultiThreaded, Options, WriteBatch};

use mint_core::error::MintError;
use mint_core::traits::{KvStore, KvWrite};

const NAMESPACE: &[u8] = b"mint/";

/// RocksDB wrapper implementing the `KvStore` trait.
#[derive(Debug)]
pub struct RocksKvStore {
    db: DBWithThreadMode<MultiThreaded>,
}

impl RocksKvStore {
    /// Open a RocksDB database at the given filesystem path.
    ///
    /// Creates the database directory if it does not exist.
    pub fn open(path: &str) -> Result<Self, MintError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DBWithThreadMode::<MultiThreaded>::open(&opts, path)
            .map_err(|e| MintError::Storage(format!("Failed to open RocksDB at {}: {}", path, e)))?;

        tracing::debug!("Opened mint store at {}", path);
        Ok(Self { db })
    }

    /// Prefix a module key with the namespace.
    fn namespaced(key: &[u8]) -> Vec<u8> {
        let mut full = Vec::with_capacity(NAMESPACE.len() + key.len());
        full.extend_from_slice(NAMESPACE);
        full.extend_from_slice(key);
        full
    }

    /// Flush memtables to disk.
    pub fn flush(&self) -> Result<(), MintError> {
        self.db
            .flush()
            .map_err(|e| MintError::Storage(format!("RocksDB flush failed: {}", e)))
    }
}

impl KvStore for RocksKvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, MintError> {
        self.db
            .get(Self::namespaced(key))
            .map_err(|e| MintError::Storage(format!("RocksDB get failed: {}", e)))
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), MintError> {
        self.db
            .put(Self::namespaced(key), value)
            .map_err(|e| MintError::Storage(format!("RocksDB put failed: {}", e)))
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), MintError> {
        self.db
            .delete(Self::namespaced(key))
            .map_err(|e| MintError::Storage(format!("RocksDB delete failed: {}", e)))
    }

    fn write_batch(&mut self, batch: Vec<KvWrite>) -> Result<(), MintError> {
        let mut wb = WriteBatch::default();
        for (key, value) in &batch {
            match value {
                Some(v) => wb.put(Self::namespaced(key), v),
                None => wb.delete(Self::namespaced(key)),
            }
        }
        self.db
            .write(wb)
            .map_err(|e| MintError::Storage(format!("RocksDB batch write failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_db_path(label: &str) -> String {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("mint_store_test_{}_{}", label, uuid::Uuid::now_v7()));
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_namespaced_key() {
        assert_eq!(RocksKvStore::namespaced(&[0x01]), b"mint/\x01".to_vec());
    }

    #[test]
    fn test_put_get_delete_and_reopen() {
        let path = temp_db_path("reopen");
        {
            let mut store = RocksKvStore::open(&path).unwrap();
            store.set(&[0x00], b"minter").unwrap();
            store.set(&[0x01], b"params").unwrap();
            store.delete(&[0x01]).unwrap();
            store.flush().unwrap();
        }
        let store = RocksKvStore::open(&path).unwrap();
        assert_eq!(store.get(&[0x00]).unwrap(), Some(b"minter".to_vec()));
        assert_eq!(store.get(&[0x01]).unwrap(), None);
        drop(store);
        let _ = std::fs::remove_dir_all(&path);
    }

    #[test]
    fn test_write_batch_is_namespaced() {
        let path = temp_db_path("batch");
        let mut store = RocksKvStore::open(&path).unwrap();
        store.set(&[0x01], b"params").unwrap();
        store
            .write_batch(vec![
                (vec![0x00], Some(b"minter".to_vec())),
                (vec![0x01], None),
                (vec![0x02], Some(vec![0x07])),
            ])
            .unwrap();

        assert_eq!(store.get(&[0x00]).unwrap(), Some(b"minter".to_vec()));
        assert_eq!(store.get(&[0x01]).unwrap(), None);
        assert_eq!(store.get(&[0x02]).unwrap(), Some(vec![0x07]));
        assert_eq!(store.db.get(b"mint/\x00").unwrap(), Some(b"minter".to_vec()));
        drop(store);
        let _ = std::fs::remove_dir_all(&path);
    }
}
