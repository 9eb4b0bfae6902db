// crates/mint-daemon/src/node.rs
//
// Wiring of a local single-node chain around the mint keeper.
//
// The keeper's records live in the configured store (memory or RocksDB).
// Bank, staking and accounts are in-memory; with the RocksDB backend the
// block height and mint denom supply are saved next to the database in
// `chain_position.json` so a restarted daemon resumes where it stopped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mint_core::error::MintError;
use mint_core::event::Event;
use mint_core::genesis::GenesisState;
use mint_core::traits::{AccountKeeper, EventSink, KvStore};
use mint_core::{Int, GOV_MODULE_NAME};
use mint_economics::{InMemoryAccounts, InMemoryBank, MintAdapters, MintKeeper, StaticStaking};
use mint_store::{MemKvStore, RocksKvStore};

use crate::config::DaemonConfig;

const POSITION_FILE: &str = "chain_position.json";

/// Event sink that writes every mint event to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &Event) -> Result<(), MintError> {
        let attrs: Vec<String> = event
            .attributes
            .iter()
            .map(|a| format!("{}={}", a.key, a.value))
            .collect();
        tracing::info!("event {} {}", event.kind, attrs.join(" "));
        Ok(())
    }
}

/// Where a persisted chain left off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainPosition {
    pub height: u64,
    pub supply: Int,
}

/// The keeper plus handles to the in-memory collaborators.
pub struct LocalChain {
    pub keeper: MintKeeper,
    pub bank: InMemoryBank,
    pub height: u64,
    pub mint_denom: String,
    position_path: Option<PathBuf>,
}

impl LocalChain {
    /// Open the store, restore the chain position, and write genesis if
    /// the store is empty.
    pub fn open(config: &DaemonConfig) -> Result<Self, Box<dyn std::error::Error>> {
        config.validate()?;

        let data_dir = expand_tilde(&config.data_dir);
        let (store, position_path): (Box<dyn KvStore>, Option<PathBuf>) =
            match config.store_backend.as_str() {
                "rocksdb" => {
                    fs::create_dir_all(&data_dir)?;
                    let db_path = format!("{}/mint_rocksdb", data_dir);
                    let store = RocksKvStore::open(&db_path)?;
                    tracing::info!("Mint store opened at {}", db_path);
                    (Box::new(store), Some(PathBuf::from(&data_dir).join(POSITION_FILE)))
                }
                _ => (Box::new(MemKvStore::new()), None),
            };

        let genesis = load_genesis(config)?;
        let position = match &position_path {
            Some(path) => read_position(path)?,
            None => None,
        };
        let (height, supply) = match position {
            Some(p) => (p.height, p.supply),
            None => (0, config.initial_supply),
        };

        let bank = InMemoryBank::new().with_supply(&genesis.params.mint_denom, supply);
        let staking = StaticStaking::new(config.bonded_ratio, supply);
        let accounts = InMemoryAccounts::new();
        let authority = config
            .authority
            .clone()
            .unwrap_or_else(|| accounts.get_module_address(GOV_MODULE_NAME));

        let adapters = MintAdapters {
            staking: Box::new(staking),
            bank: Box::new(bank.clone()),
            accounts: Box::new(accounts),
            events: Box::new(TracingEventSink),
        };
        let mut keeper = MintKeeper::new(store, adapters, authority)
            .with_fee_collector(config.fee_collector.clone())
            .with_provision_supply(config.provision_supply);

        if !keeper.is_initialized()? {
            keeper.init_genesis(&genesis)?;
        }
        // Params may have been updated since genesis.
        let mint_denom = keeper.params()?.mint_denom;

        Ok(Self {
            keeper,
            bank,
            height,
            mint_denom,
            position_path,
        })
    }

    pub fn supply(&self) -> Int {
        self.bank.supply_of(&self.mint_denom)
    }

    /// Persist the chain position for the RocksDB backend; a no-op in memory.
    pub fn save_position(&self, height: u64) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = &self.position_path {
            let position = ChainPosition {
                height,
                supply: self.supply(),
            };
            fs::write(path, serde_json::to_string_pretty(&position)?)?;
            tracing::debug!("Chain position saved at height {}", height);
        }
        Ok(())
    }
}

/// Genesis from `genesis_path`, or the default genesis with the scheduler's
/// epoch identifier.
fn load_genesis(config: &DaemonConfig) -> Result<GenesisState, Box<dyn std::error::Error>> {
    match &config.genesis_path {
        Some(path) => {
            let bytes = fs::read(expand_tilde(path))?;
            let genesis = GenesisState::from_json(&bytes)?;
            tracing::info!("Loaded genesis from {}", path);
            Ok(genesis)
        }
        None => {
            let mut genesis = GenesisState::default();
            genesis.params.epoch_identifier = config.epoch_identifier.clone();
            Ok(genesis)
        }
    }
}

fn read_position(path: &Path) -> Result<Option<ChainPosition>, Box<dyn std::error::Error>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
