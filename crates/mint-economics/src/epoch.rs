// crates/mint-economics/src/epoch.rs
//
// Epoch-regime provisioning.
//
// A fixed amount is minted at the end of every epoch of the configured
// identifier. Every `reduction_period_in_epochs` epochs the amount is
// multiplied by `reduction_factor` (e.g. 0.5 halves it), giving a
// step-down schedule similar to a halving.

use mint_core::coin::Coin;
use mint_core::error::MintError;
use mint_core::minter::Minter;
use mint_core::params::Params;
use mint_core::Dec;

/// Epoch provisions after one reduction step.
pub fn next_epoch_provisions(minter: &Minter, params: &Params) -> Result<Dec, MintError> {
    Ok(minter.epoch_provisions.checked_mul(&params.reduction_factor)?)
}

/// Whole tokens minted for one epoch.
pub fn epoch_provision(minter: &Minter, params: &Params) -> Result<Coin, MintError> {
    Ok(Coin::new(
        params.mint_denom.clone(),
        minter.epoch_provisions.truncate_int(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mint_core::Int;

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    fn epoch_params(factor: &str) -> Params {
        Params {
            epoch_identifier: "week".into(),
            reduction_factor: dec(factor),
            ..Params::default()
        }
    }

    #[test]
    fn test_halving() {
        let minter = Minter::default().with_epoch_provisions(Dec::from_u64(1_000));
        let next = next_epoch_provisions(&minter, &epoch_params("0.5")).unwrap();
        assert_eq!(next, Dec::from_u64(500));
    }

    #[test]
    fn test_two_thirds_reduction() {
        let minter = Minter::default().with_epoch_provisions(dec("821917808219.178082191780821917"));
        let two_thirds = Dec::from_u64(2).checked_quo(&Dec::from_u64(3)).unwrap();
        assert_eq!(two_thirds, dec("0.666666666666666667"));
        let next = next_epoch_provisions(&minter, &epoch_params("0.666666666666666667")).unwrap();
        assert_eq!(next, dec("547945205479.452055068493150684"));
    }

    #[test]
    fn test_factor_one_keeps_provisions() {
        let minter = Minter::default().with_epoch_provisions(dec("1234.5"));
        let next = next_epoch_provisions(&minter, &epoch_params("1")).unwrap();
        assert_eq!(next, dec("1234.5"));
    }

    #[test]
    fn test_factor_zero_stops_minting() {
        let minter = Minter::default().with_epoch_provisions(Dec::from_u64(1_000));
        let params = epoch_params("0");
        let next = next_epoch_provisions(&minter, &params).unwrap();
        assert!(next.is_zero());
        let minter = minter.with_epoch_provisions(next);
        assert!(epoch_provision(&minter, &params).unwrap().is_zero());
    }

    #[test]
    fn test_epoch_provision_truncates() {
        let minter = Minter::default().with_epoch_provisions(dec("547945205479.452055068493150684"));
        let coin = epoch_provision(&minter, &epoch_params("0.5")).unwrap();
        assert_eq!(coin, Coin::new("stake", Int::from(547_945_205_479u64)));
    }
}
