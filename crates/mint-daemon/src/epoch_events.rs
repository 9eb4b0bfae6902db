// crates/mint-daemon/src/epoch_events.rs
//
// Epoch boundary events produced by the scheduler.
//
// Epoch `n` spans blocks `(n - 1) * blocks_per_epoch + 1 ..= n * blocks_per_epoch`.
// `EpochStart` fires before the first block's mint cycle, `EpochEnd` after
// the last block's.

/// Events emitted by the epoch scheduler during block progression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpochEvent {
    /// A new epoch has begun.
    EpochStart {
        identifier: String,
        /// Number of the epoch that just started (1-based).
        number: i64,
        /// Block height at which it started.
        block: u64,
    },
    /// An epoch has closed.
    EpochEnd {
        identifier: String,
        /// Number of the epoch that just ended.
        number: i64,
        /// Last block height of the epoch.
        block: u64,
    },
}
