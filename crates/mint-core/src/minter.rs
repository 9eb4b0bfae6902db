// crates/mint-core/src/minter.rs
//
// Mutable economic state of the mint module.

use serde::{Deserialize, Serialize};

use crate::error::MintError;
use mint_math::Dec;

/// Current inflation rate and provisions.
///
/// `inflation` and `annual_provisions` drive the block regime;
/// `epoch_provisions` drives the epoch regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minter {
    /// Current annual inflation rate.
    pub inflation: Dec,
    /// Tokens expected to be minted over the next year at the current rate.
    pub annual_provisions: Dec,
    /// Tokens minted at the end of each epoch.
    #[serde(default)]
    pub epoch_provisions: Dec,
}

impl Minter {
    pub fn new(inflation: Dec, annual_provisions: Dec) -> Self {
        Self {
            inflation,
            annual_provisions,
            epoch_provisions: Dec::zero(),
        }
    }

    /// Genesis minter: the given inflation and no provisions yet.
    pub fn initial(inflation: Dec) -> Self {
        Self::new(inflation, Dec::zero())
    }

    pub fn with_epoch_provisions(mut self, epoch_provisions: Dec) -> Self {
        self.epoch_provisions = epoch_provisions;
        self
    }

    /// Every field must be non-negative.
    pub fn validate(&self) -> Result<(), MintError> {
        let fields = [
            ("inflation", &self.inflation),
            ("annual provisions", &self.annual_provisions),
            ("epoch provisions", &self.epoch_provisions),
        ];
        for (name, value) in fields {
            if value.is_negative() {
                return Err(MintError::InvalidGenesis(format!(
                    "minter {} cannot be negative, is {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for Minter {
    /// 13% initial inflation, matching the default parameter set.
    fn default() -> Self {
        Self::initial(Dec::new_with_prec(13, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_minter() {
        let m = Minter::default();
        assert_eq!(m.inflation.to_string(), "0.130000000000000000");
        assert!(m.annual_provisions.is_zero());
        assert!(m.epoch_provisions.is_zero());
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_negative_fields_rejected() {
        let neg = Dec::new_with_prec(-1, 2);
        assert!(Minter::initial(neg).validate().is_err());
        assert!(Minter::new(Dec::zero(), neg).validate().is_err());
        assert!(Minter::default()
            .with_epoch_provisions(neg)
            .validate()
            .is_err());
    }
}
