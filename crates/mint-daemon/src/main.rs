// crates/mint-daemon/src/main.rs
//
// Binary entrypoint for mintd, a local chain driver for the mint module.
//
// Initializes tracing, parses CLI arguments, loads configuration, opens
// the local chain, and dispatches to one of:
//   run            produce blocks with the epoch scheduler
//   query          read params or minter values
//   update-params  submit a parameter update through the message server

mod config;
mod epoch_events;
mod node;
mod scheduler;

use std::fs;
use std::time::Duration;

use clap::{Parser, Subcommand};
use config::DaemonConfig;
use node::LocalChain;
use scheduler::EpochScheduler;

use mint_core::params::Params;
use mint_core::proto;
use mint_economics::{MsgServer, QueryServer};

/// mintd: drives the mint module on a local single-node chain.
#[derive(Parser, Debug)]
#[command(name = "mintd", version = "0.1.0", about = "Mint module local chain daemon")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "~/.mintd/config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Produce blocks, minting each block and at every epoch end.
    Run {
        /// Number of blocks to produce; overrides the config file.
        #[arg(long)]
        blocks: Option<u64>,
    },

    /// Read a value from the mint module.
    #[command(subcommand)]
    Query(QueryCmd),

    /// Replace all mint params.
    UpdateParams {
        /// Signer of the update; must equal the module authority.
        #[arg(long)]
        authority: String,

        /// JSON file holding the complete new params.
        #[arg(long)]
        file: String,
    },
}

#[derive(Debug, Subcommand)]
enum QueryCmd {
    Params,
    Inflation,
    AnnualProvisions,
    EpochProvisions,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = node::expand_tilde(&args.config);
    let (daemon_config, config_error) = match DaemonConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (DaemonConfig::default(), Some(e)),
    };

    // Initialize tracing subscriber for structured logging; RUST_LOG wins
    // over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&daemon_config.log_level)),
        )
        .init();

    match config_error {
        None => tracing::info!("Loaded configuration from {}", config_path),
        Some(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            config_path,
            e
        ),
    }

    match args.command {
        Commands::Run { blocks } => run(daemon_config, blocks).await,
        Commands::Query(cmd) => query(&daemon_config, cmd),
        Commands::UpdateParams { authority, file } => update_params(&daemon_config, authority, &file),
    }
}

async fn run(mut config: DaemonConfig, blocks: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    // CLI --blocks flag overrides the config file value.
    if let Some(blocks) = blocks {
        config.blocks = blocks;
    }

    tracing::info!("mintd v0.1.0");
    tracing::info!("Store backend: {}", config.store_backend);
    tracing::info!("Data directory: {}", config.data_dir);
    tracing::info!(
        "Epoch: {} every {} blocks",
        config.epoch_identifier,
        config.blocks_per_epoch
    );

    let mut chain = LocalChain::open(&config)?;
    let mut scheduler = EpochScheduler::new(
        config.epoch_identifier.clone(),
        config.blocks_per_epoch,
        chain.height,
    );

    let result = scheduler
        .run(
            &mut chain.keeper,
            config.blocks,
            Duration::from_millis(config.block_interval_ms),
        )
        .await;

    // Save how far we got even when a cycle failed; a block whose cycle did
    // not commit is replayed on the next run.
    chain.save_position(scheduler.last_committed_block())?;
    let summary = result?;

    let minter = chain.keeper.minter()?;
    let report = serde_json::json!({
        "blocks": summary.blocks,
        "last_height": summary.last_height,
        "epochs_ended": summary.epochs_ended,
        "minted": summary.minted.to_string(),
        "supply": chain.supply().to_string(),
        "inflation": minter.inflation.to_string(),
        "annual_provisions": minter.annual_provisions.to_string(),
        "epoch_provisions": minter.epoch_provisions.to_string(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn query(config: &DaemonConfig, cmd: QueryCmd) -> Result<(), Box<dyn std::error::Error>> {
    let chain = LocalChain::open(config)?;
    let server = QueryServer::new(&chain.keeper);

    let output = match cmd {
        QueryCmd::Params => {
            let resp = server.params(proto::QueryParamsRequest {})?;
            let params = resp
                .params
                .map(Params::try_from)
                .transpose()?
                .ok_or("params missing from response")?;
            serde_json::to_string_pretty(&params)?
        }
        QueryCmd::Inflation => {
            let resp = server.inflation(proto::QueryInflationRequest {})?;
            proto::dec_from_wire_bytes("inflation", &resp.inflation)?.to_string()
        }
        QueryCmd::AnnualProvisions => {
            let resp = server.annual_provisions(proto::QueryAnnualProvisionsRequest {})?;
            proto::dec_from_wire_bytes("annual_provisions", &resp.annual_provisions)?.to_string()
        }
        QueryCmd::EpochProvisions => {
            let resp = server.epoch_provisions(proto::QueryEpochProvisionsRequest {})?;
            proto::dec_from_wire_bytes("epoch_provisions", &resp.epoch_provisions)?.to_string()
        }
    };
    println!("{}", output);
    Ok(())
}

fn update_params(
    config: &DaemonConfig,
    authority: String,
    file: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(node::expand_tilde(file))?;
    let params: Params = serde_json::from_str(&contents)?;

    let mut chain = LocalChain::open(config)?;
    let msg = proto::MsgUpdateParams {
        authority,
        params: Some(proto::Params::from(&params)),
    };

    if let Err(e) = MsgServer::new(&mut chain.keeper).update_params(msg) {
        tracing::error!("Params update rejected: {}", e);
        return Err(e.into());
    }
    println!("{}", serde_json::to_string_pretty(&chain.keeper.params()?)?);
    Ok(())
}
