// crates/mint-economics/src/msg_server.rs
//
// Transaction handler for governance-gated parameter updates.

use mint_core::error::MintError;
use mint_core::params::Params;
use mint_core::proto::{MsgUpdateParams, MsgUpdateParamsResponse};

use crate::keeper::MintKeeper;

/// Handles mint module transactions against a keeper.
pub struct MsgServer<'a> {
    keeper: &'a mut MintKeeper,
}

impl<'a> MsgServer<'a> {
    pub fn new(keeper: &'a mut MintKeeper) -> Self {
        Self { keeper }
    }

    /// Replace all parameters. Only the keeper's authority may sign.
    ///
    /// The stored params are untouched on any error.
    pub fn update_params(&mut self, msg: MsgUpdateParams) -> Result<MsgUpdateParamsResponse, MintError> {
        if msg.authority != self.keeper.authority() {
            return Err(MintError::Unauthorized {
                expected: self.keeper.authority().to_string(),
                got: msg.authority,
            });
        }

        let wire = msg
            .params
            .ok_or_else(|| MintError::InvalidParams("params cannot be empty".to_string()))?;
        let params = Params::try_from(wire)?;
        self.keeper.set_params(&params)?;

        tracing::info!(
            "Mint params updated by {}: denom={}, inflation=[{}, {}], goal_bonded={}",
            msg.authority,
            params.mint_denom,
            params.inflation_min,
            params.inflation_max,
            params.goal_bonded
        );
        Ok(MsgUpdateParamsResponse {})
    }
}
