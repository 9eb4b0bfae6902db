// crates/mint-core/src/params.rs
//
// Module parameters for both provisioning regimes.
//
// Block regime:  mint_denom, inflation_rate_change, inflation_max,
//                inflation_min, goal_bonded, blocks_per_year, max_supply.
// Epoch regime:  epoch_identifier, reduction_period_in_epochs,
//                reduction_factor, minting_rewards_distribution_start_epoch.
//
// An empty `epoch_identifier` disables the epoch regime; its remaining
// fields are then not validated.

use serde::{Deserialize, Serialize};

use crate::coin::validate_denom;
use crate::error::MintError;
use mint_math::{Dec, Int};

/// Default number of blocks per year: one block every five seconds over a
/// 365.25-day year (60 * 60 * 8766 / 5).
pub const DEFAULT_BLOCKS_PER_YEAR: u64 = 60 * 60 * 8766 / 5;

/// Persisted configuration of the mint module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Denomination the module mints.
    pub mint_denom: String,
    /// Maximum annual change in the inflation rate.
    pub inflation_rate_change: Dec,
    /// Upper bound of the inflation rate.
    pub inflation_max: Dec,
    /// Lower bound of the inflation rate.
    pub inflation_min: Dec,
    /// Target fraction of staking tokens that are bonded.
    pub goal_bonded: Dec,
    /// Expected number of blocks per year.
    pub blocks_per_year: u64,
    /// Supply cap of `mint_denom`; zero means unlimited.
    pub max_supply: Int,
    /// Epoch whose end triggers epoch minting. Empty disables the regime.
    #[serde(default)]
    pub epoch_identifier: String,
    /// Number of epochs between provision reductions.
    #[serde(default = "default_reduction_period")]
    pub reduction_period_in_epochs: i64,
    /// Multiplier applied to epoch provisions at each reduction.
    #[serde(default = "default_reduction_factor")]
    pub reduction_factor: Dec,
    /// First epoch at which epoch minting pays out.
    #[serde(default)]
    pub minting_rewards_distribution_start_epoch: i64,
}

fn default_reduction_period() -> i64 {
    365
}

fn default_reduction_factor() -> Dec {
    Dec::new_with_prec(5, 1)
}

impl Default for Params {
    fn default() -> Self {
        Self {
            mint_denom: "stake".to_string(),
            inflation_rate_change: Dec::new_with_prec(13, 2),
            inflation_max: Dec::new_with_prec(20, 2),
            inflation_min: Dec::new_with_prec(7, 2),
            goal_bonded: Dec::new_with_prec(67, 2),
            blocks_per_year: DEFAULT_BLOCKS_PER_YEAR,
            max_supply: Int::zero(),
            epoch_identifier: String::new(),
            reduction_period_in_epochs: default_reduction_period(),
            reduction_factor: default_reduction_factor(),
            minting_rewards_distribution_start_epoch: 0,
        }
    }
}

fn invalid(msg: String) -> MintError {
    MintError::InvalidParams(msg)
}

/// Reject values outside `[0, 1]`.
fn validate_unit_interval(name: &str, v: &Dec) -> Result<(), MintError> {
    if v.is_negative() {
        return Err(invalid(format!("{} cannot be negative: {}", name, v)));
    }
    if *v > Dec::one() {
        return Err(invalid(format!("{} too large: {}", name, v)));
    }
    Ok(())
}

impl Params {
    /// Whether the epoch regime is configured.
    pub fn epoch_minting_enabled(&self) -> bool {
        !self.epoch_identifier.is_empty()
    }

    /// Whether a supply cap is configured.
    pub fn has_max_supply(&self) -> bool {
        !self.max_supply.is_zero()
    }

    /// Check every validation rule. All must hold for the record to be stored.
    pub fn validate(&self) -> Result<(), MintError> {
        if self.mint_denom.trim().is_empty() {
            return Err(invalid("mint denom cannot be blank".to_string()));
        }
        validate_denom(&self.mint_denom).map_err(invalid)?;

        validate_unit_interval("inflation rate change", &self.inflation_rate_change)?;
        validate_unit_interval("max inflation", &self.inflation_max)?;
        validate_unit_interval("min inflation", &self.inflation_min)?;
        validate_unit_interval("goal bonded", &self.goal_bonded)?;

        // The controller divides by goal_bonded.
        if self.goal_bonded.is_zero() {
            return Err(invalid(format!(
                "goal bonded must be positive: {}",
                self.goal_bonded
            )));
        }

        if self.blocks_per_year == 0 {
            return Err(invalid(format!(
                "blocks per year must be positive: {}",
                self.blocks_per_year
            )));
        }

        if self.max_supply.is_negative() {
            return Err(invalid(format!(
                "max supply must be positive: {}",
                self.max_supply
            )));
        }

        if self.inflation_max < self.inflation_min {
            return Err(invalid(format!(
                "max inflation ({}) must be greater than or equal to min inflation ({})",
                self.inflation_max, self.inflation_min
            )));
        }

        if self.epoch_minting_enabled() {
            self.validate_epoch_regime()?;
        }

        Ok(())
    }

    fn validate_epoch_regime(&self) -> Result<(), MintError> {
        if self.epoch_identifier.trim().is_empty() {
            return Err(invalid("epoch identifier cannot be blank".to_string()));
        }
        if self.reduction_period_in_epochs < 1 {
            return Err(invalid(format!(
                "reduction period must be positive: {}",
                self.reduction_period_in_epochs
            )));
        }
        validate_unit_interval("reduction factor", &self.reduction_factor)?;
        if self.minting_rewards_distribution_start_epoch < 0 {
            return Err(invalid(format!(
                "minting rewards distribution start epoch cannot be negative: {}",
                self.minting_rewards_distribution_start_epoch
            )));
        }
        Ok(())
    }
}
