// crates/mint-economics/src/controller.rs
//
// Block-regime inflation controller.
//
// The inflation rate drifts toward the bonded-ratio goal:
//   change_per_year  = (1 - bonded_ratio / goal_bonded) * inflation_rate_change
//   change_per_block = change_per_year / blocks_per_year
//   next_inflation   = clamp(inflation + change_per_block, inflation_min, inflation_max)
//
// Below the goal the rate rises; above it the rate falls. Annual provisions
// are the inflation rate applied to the total supply, and each block mints
// 1/blocks_per_year of that, truncated to whole tokens.

use mint_core::coin::Coin;
use mint_core::error::MintError;
use mint_core::minter::Minter;
use mint_core::params::Params;
use mint_core::{Dec, Int};

/// Computes the next annual inflation rate.
///
/// The keeper holds one boxed calculator; chains with a different inflation
/// curve swap it in with `MintKeeper::with_inflation_calculator`.
pub trait InflationCalculator: Send + Sync {
    fn next_inflation_rate(
        &self,
        params: &Params,
        minter: &Minter,
        bonded_ratio: &Dec,
    ) -> Result<Dec, MintError>;
}

/// The default bonded-ratio controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct BondedRatioController;

impl InflationCalculator for BondedRatioController {
    fn next_inflation_rate(
        &self,
        params: &Params,
        minter: &Minter,
        bonded_ratio: &Dec,
    ) -> Result<Dec, MintError> {
        next_inflation_rate(params, minter, bonded_ratio)
    }
}

impl<F> InflationCalculator for F
where
    F: Fn(&Params, &Minter, &Dec) -> Result<Dec, MintError> + Send + Sync,
{
    fn next_inflation_rate(
        &self,
        params: &Params,
        minter: &Minter,
        bonded_ratio: &Dec,
    ) -> Result<Dec, MintError> {
        self(params, minter, bonded_ratio)
    }
}

/// Next inflation rate, always within `[inflation_min, inflation_max]`.
pub fn next_inflation_rate(
    params: &Params,
    minter: &Minter,
    bonded_ratio: &Dec,
) -> Result<Dec, MintError> {
    let bonded_vs_goal = bonded_ratio.checked_quo(&params.goal_bonded)?;
    let change_per_year = Dec::one()
        .checked_sub(&bonded_vs_goal)?
        .checked_mul(&params.inflation_rate_change)?;
    let change_per_block = change_per_year.checked_quo(&Dec::from_u64(params.blocks_per_year))?;

    let inflation = minter.inflation.checked_add(&change_per_block)?;
    Ok(inflation.clamp(params.inflation_min, params.inflation_max))
}

/// Annual provisions at the minter's current inflation rate.
pub fn next_annual_provisions(
    _params: &Params,
    minter: &Minter,
    total_supply: &Int,
) -> Result<Dec, MintError> {
    Ok(minter.inflation.checked_mul_int(total_supply)?)
}

/// Whole tokens to mint this block.
pub fn block_provision(params: &Params, minter: &Minter) -> Result<Coin, MintError> {
    let per_block = minter
        .annual_provisions
        .checked_quo_int(&Int::from(params.blocks_per_year))?;
    Ok(Coin::new(params.mint_denom.clone(), per_block.truncate_int()))
}
