// crates/mint-daemon/tests/rocks_persistence.rs
//
// Keeper persistence over RocksDB, wired the way mintd wires it.
//
// mintd is a binary crate with no lib.rs, so these tests build the keeper
// from the library crates directly. Raw store behavior is tested in
// mint-store.

use uuid::Uuid;

use mint_core::genesis::GenesisState;
use mint_core::minter::Minter;
use mint_core::params::Params;
use mint_core::{Dec, Int};
use mint_economics::{
    InMemoryAccounts, InMemoryBank, MintAdapters, MintKeeper, RecordingEventSink, StaticStaking,
};
use mint_store::RocksKvStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a temporary directory path using UUID to avoid conflicts.
fn temp_db_path(label: &str) -> String {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("mintd_test_{}_{}", label, Uuid::now_v7()));
    path.to_string_lossy().to_string()
}

fn open_keeper(path: &str, bank: &InMemoryBank) -> MintKeeper {
    let store = RocksKvStore::open(path).unwrap();
    let adapters = MintAdapters {
        staking: Box::new(StaticStaking::new(Dec::zero(), Int::zero())),
        bank: Box::new(bank.clone()),
        accounts: Box::new(InMemoryAccounts::new()),
        events: Box::new(RecordingEventSink::new()),
    };
    MintKeeper::new(Box::new(store), adapters, "gov")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_state_survives_reopen() {
    let path = temp_db_path("reopen");
    let bank = InMemoryBank::new().with_supply("stake", Int::from(1_000_000_000u64));

    let exported = {
        let mut keeper = open_keeper(&path, &bank);
        assert!(!keeper.is_initialized().unwrap());
        keeper.init_genesis(&GenesisState::default()).unwrap();
        for height in 1..=5 {
            keeper.begin_block(height).unwrap();
        }
        keeper.export_genesis().unwrap()
    };

    let keeper = open_keeper(&path, &bank);
    assert!(keeper.is_initialized().unwrap());
    assert_eq!(keeper.export_genesis().unwrap(), exported);
    assert!(exported.minter.inflation > Dec::new_with_prec(13, 2));

    drop(keeper);
    let _ = std::fs::remove_dir_all(&path);
}

#[test]
fn test_epoch_reduction_persists() {
    let path = temp_db_path("epoch");
    let bank = InMemoryBank::new();
    let params = Params {
        epoch_identifier: "week".into(),
        reduction_period_in_epochs: 1,
        minting_rewards_distribution_start_epoch: 1,
        ..Params::default()
    };
    let genesis = GenesisState::new(
        Minter::default().with_epoch_provisions(Dec::from_u64(1_000)),
        params,
    );

    {
        let mut keeper = open_keeper(&path, &bank);
        keeper.init_genesis(&genesis).unwrap();
        keeper.after_epoch_end("week", 1).unwrap();
        keeper.after_epoch_end("week", 2).unwrap();
    }

    let keeper = open_keeper(&path, &bank);
    assert_eq!(keeper.epoch_provisions().unwrap(), Dec::from_u64(500));
    assert_eq!(keeper.last_reduction_epoch().unwrap(), 2);
    assert_eq!(bank.supply_of("stake"), Int::from(1_500u64));

    drop(keeper);
    let _ = std::fs::remove_dir_all(&path);
}
