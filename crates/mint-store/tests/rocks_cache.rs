// crates/mint-store/tests/rocks_cache.rs
//
// CacheKv and MintState over a real RocksDB store.

use uuid::Uuid;

use mint_core::minter::Minter;
use mint_core::traits::KvStore;
use mint_core::Dec;
use mint_store::{CacheKv, MintState, RocksKvStore, LAST_REDUCTION_EPOCH_KEY, MINTER_KEY};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a temporary directory path using UUID to avoid conflicts.
fn temp_db_path(label: &str) -> String {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("mint_store_it_{}_{}", label, Uuid::now_v7()));
    path.to_string_lossy().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_dropped_cache_leaves_rocks_untouched() {
    let path = temp_db_path("cache");
    let mut store = RocksKvStore::open(&path).unwrap();
    {
        let mut state = MintState::new(&mut store);
        state.set_minter(&Minter::default()).unwrap();
    }

    {
        let mut staged = MintState::new(CacheKv::new(&mut store));
        staged
            .set_minter(&Minter::initial(Dec::new_with_prec(5, 2)))
            .unwrap();
        // Dropped without commit.
    }
    assert_eq!(MintState::new(&mut store).get_minter().unwrap(), Minter::default());

    let mut staged = MintState::new(CacheKv::new(&mut store));
    staged
        .set_minter(&Minter::initial(Dec::new_with_prec(5, 2)))
        .unwrap();
    staged.set_last_reduction_epoch(9).unwrap();
    staged.into_inner().commit().unwrap();

    let state = MintState::new(&mut store);
    assert_eq!(state.get_minter().unwrap().inflation, Dec::new_with_prec(5, 2));
    assert_eq!(state.get_last_reduction_epoch().unwrap(), 9);
    assert!(store.has(MINTER_KEY).unwrap());

    drop(store);
    let _ = std::fs::remove_dir_all(&path);
}

#[test]
fn test_committed_cycle_survives_reopen() {
    let path = temp_db_path("reopen");
    {
        let mut store = RocksKvStore::open(&path).unwrap();
        let mut staged = MintState::new(CacheKv::new(&mut store));
        staged
            .set_minter(&Minter::default().with_epoch_provisions(Dec::from_u64(500)))
            .unwrap();
        staged.set_last_reduction_epoch(2).unwrap();
        staged.into_inner().commit().unwrap();
        store.flush().unwrap();
    }

    let mut store = RocksKvStore::open(&path).unwrap();
    assert!(store.has(LAST_REDUCTION_EPOCH_KEY).unwrap());
    let state = MintState::new(&mut store);
    assert_eq!(state.get_minter().unwrap().epoch_provisions, Dec::from_u64(500));
    assert_eq!(state.get_last_reduction_epoch().unwrap(), 2);

    drop(state);
    drop(store);
    let _ = std::fs::remove_dir_all(&path);
}
