// crates/mint-daemon/src/scheduler.rs
//
// Block loop and epoch scheduler for mintd.
//
// Each block: fire `before_epoch_start` if the block opens an epoch, run
// the keeper's block-regime mint cycle, then fire `after_epoch_end` if the
// block closes one. A fatal mint error stops the loop.

use std::time::Duration;

use mint_core::error::MintError;
use mint_core::traits::EpochHooks;
use mint_core::Int;
use mint_economics::MintKeeper;

use crate::epoch_events::EpochEvent;

/// What happened in one block.
#[derive(Debug, Clone)]
pub struct BlockReport {
    pub height: u64,
    /// Coins minted by the block regime.
    pub block_minted: Int,
    /// Coins minted by the epoch regime (zero unless an epoch closed).
    pub epoch_minted: Int,
    pub epoch_events: Vec<EpochEvent>,
}

/// Totals over a `run`.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub blocks: u64,
    pub last_height: u64,
    pub epochs_ended: u64,
    pub minted: Int,
}

/// Scheduler that produces blocks and triggers epoch transitions.
pub struct EpochScheduler {
    epoch_identifier: String,
    /// Number of blocks in each epoch.
    blocks_per_epoch: u64,
    /// Height of the last block the scheduler advanced to (0 before the first).
    current_block: u64,
    /// Height of the last block whose block-regime cycle committed.
    last_committed_block: u64,
}

impl EpochScheduler {
    /// Create a scheduler that resumes after `current_block`.
    ///
    /// `blocks_per_epoch` must be positive.
    pub fn new(epoch_identifier: impl Into<String>, blocks_per_epoch: u64, current_block: u64) -> Self {
        Self {
            epoch_identifier: epoch_identifier.into(),
            blocks_per_epoch: blocks_per_epoch.max(1),
            current_block,
            last_committed_block: current_block,
        }
    }

    pub fn current_block(&self) -> u64 {
        self.current_block
    }

    /// Height a restart should resume after. Trails `current_block` when
    /// the last block failed before its mint cycle committed.
    pub fn last_committed_block(&self) -> u64 {
        self.last_committed_block
    }

    /// Advance the block counter and report the epoch boundaries the new
    /// block sits on, start before end.
    pub fn advance_block(&mut self) -> Vec<EpochEvent> {
        self.current_block += 1;
        let height = self.current_block;
        let mut events = Vec::new();

        if (height - 1) % self.blocks_per_epoch == 0 {
            events.push(EpochEvent::EpochStart {
                identifier: self.epoch_identifier.clone(),
                number: ((height - 1) / self.blocks_per_epoch + 1) as i64,
                block: height,
            });
        }
        if height % self.blocks_per_epoch == 0 {
            events.push(EpochEvent::EpochEnd {
                identifier: self.epoch_identifier.clone(),
                number: (height / self.blocks_per_epoch) as i64,
                block: height,
            });
        }
        events
    }

    /// Produce one block against the keeper.
    pub fn step(&mut self, keeper: &mut MintKeeper) -> Result<BlockReport, MintError> {
        let events = self.advance_block();
        let height = self.current_block;

        for event in &events {
            if let EpochEvent::EpochStart { identifier, number, block } = event {
                tracing::info!("=== EPOCH {} START === (block {})", number, block);
                keeper.before_epoch_start(identifier, *number)?;
            }
        }

        let block_minted = keeper.begin_block(height)?.minted.amount;
        self.last_committed_block = height;

        let mut epoch_minted = Int::zero();
        for event in &events {
            if let EpochEvent::EpochEnd { identifier, number, block } = event {
                tracing::info!("=== EPOCH {} END === (block {})", number, block);
                if let Some(outcome) = keeper.after_epoch_end(identifier, *number)? {
                    epoch_minted = epoch_minted.checked_add(&outcome.minted.amount)?;
                }
            }
        }

        tracing::trace!(
            "Block {} (epoch block {}/{}) minted {} + {}",
            height,
            (height - 1) % self.blocks_per_epoch + 1,
            self.blocks_per_epoch,
            block_minted,
            epoch_minted
        );

        Ok(BlockReport {
            height,
            block_minted,
            epoch_minted,
            epoch_events: events,
        })
    }

    /// Produce up to `blocks` blocks, sleeping `interval` between them.
    ///
    /// Stops early on Ctrl-C; returns the first fatal mint error.
    pub async fn run(
        &mut self,
        keeper: &mut MintKeeper,
        blocks: u64,
        interval: Duration,
    ) -> Result<RunSummary, MintError> {
        tracing::info!(
            "Epoch scheduler started (identifier={}, blocks_per_epoch={}, from height {})",
            self.epoch_identifier,
            self.blocks_per_epoch,
            self.current_block + 1
        );

        let mut summary = RunSummary {
            last_height: self.current_block,
            ..RunSummary::default()
        };

        while summary.blocks < blocks {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Epoch scheduler received shutdown signal");
                    break;
                }
                _ = tokio::time::sleep(interval) => {
                    let report = self.step(keeper).map_err(|e| {
                        tracing::error!("Mint cycle failed at height {}: {}", self.current_block, e);
                        e
                    })?;
                    summary.blocks += 1;
                    summary.last_height = report.height;
                    summary.epochs_ended += report
                        .epoch_events
                        .iter()
                        .filter(|e| matches!(e, EpochEvent::EpochEnd { .. }))
                        .count() as u64;
                    summary.minted = summary
                        .minted
                        .checked_add(&report.block_minted)?
                        .checked_add(&report.epoch_minted)?;
                }
            }
        }

        Ok(summary)
    }
}
