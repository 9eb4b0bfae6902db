// crates/mint-daemon/src/config.rs
//
// Runtime configuration for mintd.
// Loaded from a TOML file or populated with defaults.

use serde::Deserialize;
use std::fs;

use mint_core::{Dec, Int};
use mint_economics::ProvisionSupply;

/// Runtime configuration for the daemon.
#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    /// Directory for the RocksDB store and the local chain position.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Store backend: "memory" or "rocksdb".
    #[serde(default = "default_store_backend")]
    pub store_backend: String,

    /// Log level used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Address allowed to update params. Defaults to the gov module address.
    #[serde(default)]
    pub authority: Option<String>,

    /// Module account that receives minted coins.
    #[serde(default = "default_fee_collector")]
    pub fee_collector: String,

    /// Optional JSON genesis file; the default genesis is used otherwise.
    #[serde(default)]
    pub genesis_path: Option<String>,

    /// Blocks to produce per `run`.
    #[serde(default = "default_blocks")]
    pub blocks: u64,

    /// Delay between blocks in milliseconds.
    #[serde(default = "default_block_interval_ms")]
    pub block_interval_ms: u64,

    /// Identifier of the epoch the scheduler drives.
    #[serde(default = "default_epoch_identifier")]
    pub epoch_identifier: String,

    #[serde(default = "default_blocks_per_epoch")]
    pub blocks_per_epoch: u64,

    /// Bonded ratio reported by the local staking view.
    #[serde(default = "default_bonded_ratio")]
    pub bonded_ratio: Dec,

    /// Supply of the mint denom on a fresh chain.
    #[serde(default = "default_initial_supply")]
    pub initial_supply: Int,

    /// Supply figure the block regime applies inflation to.
    #[serde(default)]
    pub provision_supply: ProvisionSupply,
}

fn default_data_dir() -> String {
    "~/.mintd/data".to_string()
}

fn default_store_backend() -> String {
    "memory".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_fee_collector() -> String {
    mint_core::FEE_COLLECTOR_NAME.to_string()
}

fn default_blocks() -> u64 {
    100
}

fn default_block_interval_ms() -> u64 {
    0
}

fn default_epoch_identifier() -> String {
    "day".to_string()
}

fn default_blocks_per_epoch() -> u64 {
    10
}

fn default_bonded_ratio() -> Dec {
    Dec::new_with_prec(5, 1)
}

fn default_initial_supply() -> Int {
    Int::from(1_000_000_000_000u64)
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            store_backend: default_store_backend(),
            log_level: default_log_level(),
            authority: None,
            fee_collector: default_fee_collector(),
            genesis_path: None,
            blocks: default_blocks(),
            block_interval_ms: default_block_interval_ms(),
            epoch_identifier: default_epoch_identifier(),
            blocks_per_epoch: default_blocks_per_epoch(),
            bonded_ratio: default_bonded_ratio(),
            initial_supply: default_initial_supply(),
            provision_supply: ProvisionSupply::default(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: DaemonConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Reject settings the daemon cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.blocks_per_epoch == 0 {
            return Err("blocks_per_epoch must be positive".to_string());
        }
        if !matches!(self.store_backend.as_str(), "memory" | "rocksdb") {
            return Err(format!(
                "unknown store backend {:?} (expected \"memory\" or \"rocksdb\")",
                self.store_backend
            ));
        }
        if self.bonded_ratio.is_negative() || self.bonded_ratio > Dec::one() {
            return Err(format!("bonded_ratio out of range: {}", self.bonded_ratio));
        }
        if self.initial_supply.is_negative() {
            return Err(format!("initial_supply cannot be negative: {}", self.initial_supply));
        }
        Ok(())
    }
}
