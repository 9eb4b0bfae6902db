// crates/mint-core/src/genesis.rs
//
// Genesis state of the mint module, loaded from and exported to JSON.

use serde::{Deserialize, Serialize};

use crate::error::MintError;
use crate::minter::Minter;
use crate::params::Params;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenesisState {
    pub minter: Minter,
    pub params: Params,
    /// Epoch at which provisions were last reduced.
    #[serde(default)]
    pub last_reduction_epoch: i64,
}

impl GenesisState {
    pub fn new(minter: Minter, params: Params) -> Self {
        Self {
            minter,
            params,
            last_reduction_epoch: 0,
        }
    }

    /// Validate params, minter and the reduction counter.
    pub fn validate(&self) -> Result<(), MintError> {
        self.params
            .validate()
            .map_err(|e| MintError::InvalidGenesis(e.to_string()))?;
        self.minter.validate()?;
        if self.last_reduction_epoch < 0 {
            return Err(MintError::InvalidGenesis(format!(
                "last reduction epoch cannot be negative: {}",
                self.last_reduction_epoch
            )));
        }
        Ok(())
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, MintError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_json(&self) -> Result<String, MintError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mint_math::Dec;

    #[test]
    fn test_default_genesis_is_valid() {
        assert!(GenesisState::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_params_surface_as_genesis_error() {
        let mut genesis = GenesisState::default();
        genesis.params.blocks_per_year = 0;
        assert!(matches!(genesis.validate(), Err(MintError::InvalidGenesis(_))));
    }

    #[test]
    fn test_negative_inflation_rejected() {
        let genesis = GenesisState::new(Minter::initial(Dec::new_with_prec(-1, 1)), Params::default());
        assert!(genesis.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let mut genesis = GenesisState::default();
        genesis.last_reduction_epoch = 12;
        let json = genesis.to_json().unwrap();
        assert_eq!(GenesisState::from_json(json.as_bytes()).unwrap(), genesis);
    }

    #[test]
    fn test_json_missing_epoch_fields_default() {
        let json = r#"{
            "minter": {"inflation": "0.13", "annual_provisions": "0"},
            "params": {
                "mint_denom": "stake",
                "inflation_rate_change": "0.13",
                "inflation_max": "0.2",
                "inflation_min": "0.07",
                "goal_bonded": "0.67",
                "blocks_per_year": 6311520,
                "max_supply": "0"
            }
        }"#;
        let genesis = GenesisState::from_json(json.as_bytes()).unwrap();
        assert_eq!(genesis, GenesisState::default());
    }
}
