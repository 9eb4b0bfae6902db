// crates/mint-core/src/proto.rs
//
// Protobuf wire messages for the mint module.
//
// Field numbers are fixed: persisted state and transactions from every
// validator must encode to identical bytes. Decimal fields carry the
// `LegacyDec` custom type (the backing integer's decimal digits) and
// integer fields the `Int` custom type (plain decimal digits).

use crate::error::MintError;
use mint_math::{Dec, Int};

/// Params defines the parameters for the mint module.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Params {
    /// type of coin to mint
    #[prost(string, tag = "1")]
    pub mint_denom: ::prost::alloc::string::String,
    /// maximum annual change in inflation rate
    #[prost(string, tag = "2")]
    pub inflation_rate_change: ::prost::alloc::string::String,
    /// maximum inflation rate
    #[prost(string, tag = "3")]
    pub inflation_max: ::prost::alloc::string::String,
    /// minimum inflation rate
    #[prost(string, tag = "4")]
    pub inflation_min: ::prost::alloc::string::String,
    /// goal of percent bonded atoms
    #[prost(string, tag = "5")]
    pub goal_bonded: ::prost::alloc::string::String,
    /// expected blocks per year
    #[prost(uint64, tag = "6")]
    pub blocks_per_year: u64,
    /// maximum supply for the token; zero means unlimited
    #[prost(string, tag = "7")]
    pub max_supply: ::prost::alloc::string::String,
    /// epoch whose end triggers epoch minting
    #[prost(string, tag = "8")]
    pub epoch_identifier: ::prost::alloc::string::String,
    /// number of epochs between provision reductions
    #[prost(int64, tag = "9")]
    pub reduction_period_in_epochs: i64,
    /// multiplier applied to epoch provisions at each reduction
    #[prost(string, tag = "10")]
    pub reduction_factor: ::prost::alloc::string::String,
    /// first epoch that pays out epoch provisions
    #[prost(int64, tag = "11")]
    pub minting_rewards_distribution_start_epoch: i64,
}

/// Minter represents the minting state.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Minter {
    /// current annual inflation rate
    #[prost(string, tag = "1")]
    pub inflation: ::prost::alloc::string::String,
    /// current annual expected provisions
    #[prost(string, tag = "2")]
    pub annual_provisions: ::prost::alloc::string::String,
    /// current per-epoch provisions
    #[prost(string, tag = "3")]
    pub epoch_provisions: ::prost::alloc::string::String,
}

/// GenesisState defines the mint module's genesis state.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenesisState {
    #[prost(message, optional, tag = "1")]
    pub minter: ::core::option::Option<Minter>,
    #[prost(message, optional, tag = "2")]
    pub params: ::core::option::Option<Params>,
    #[prost(int64, tag = "3")]
    pub last_reduction_epoch: i64,
}

/// MsgUpdateParams is the governance message that replaces all parameters.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUpdateParams {
    /// address of the governance account
    #[prost(string, tag = "1")]
    pub authority: ::prost::alloc::string::String,
    /// the full set of new parameters
    #[prost(message, optional, tag = "2")]
    pub params: ::core::option::Option<Params>,
}

/// MsgUpdateParamsResponse is empty.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUpdateParamsResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryParamsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: ::core::option::Option<Params>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryInflationRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryInflationResponse {
    /// current minting inflation value, LegacyDec wire bytes
    #[prost(bytes = "vec", tag = "1")]
    pub inflation: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAnnualProvisionsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAnnualProvisionsResponse {
    /// current minting annual provisions value, LegacyDec wire bytes
    #[prost(bytes = "vec", tag = "1")]
    pub annual_provisions: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryEpochProvisionsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryEpochProvisionsResponse {
    /// current per-epoch provisions value, LegacyDec wire bytes
    #[prost(bytes = "vec", tag = "1")]
    pub epoch_provisions: ::prost::alloc::vec::Vec<u8>,
}

/// Decode a `LegacyDec` wire string.
pub fn dec_from_wire(field: &str, s: &str) -> Result<Dec, MintError> {
    Dec::from_wire(s).map_err(|e| MintError::MalformedDecimal(format!("{}: {}", field, e)))
}

/// Decode a `LegacyDec` carried as raw bytes in a query response.
pub fn dec_from_wire_bytes(field: &str, bytes: &[u8]) -> Result<Dec, MintError> {
    let s = std::str::from_utf8(bytes)
        .map_err(|e| MintError::MalformedDecimal(format!("{}: {}", field, e)))?;
    dec_from_wire(field, s)
}

fn int_from_wire(field: &str, s: &str) -> Result<Int, MintError> {
    if s.is_empty() {
        return Ok(Int::zero());
    }
    s.parse()
        .map_err(|e| MintError::MalformedDecimal(format!("{}: {}", field, e)))
}

impl From<&crate::params::Params> for Params {
    fn from(p: &crate::params::Params) -> Self {
        Self {
            mint_denom: p.mint_denom.clone(),
            inflation_rate_change: p.inflation_rate_change.to_wire(),
            inflation_max: p.inflation_max.to_wire(),
            inflation_min: p.inflation_min.to_wire(),
            goal_bonded: p.goal_bonded.to_wire(),
            blocks_per_year: p.blocks_per_year,
            max_supply: p.max_supply.to_string(),
            epoch_identifier: p.epoch_identifier.clone(),
            reduction_period_in_epochs: p.reduction_period_in_epochs,
            reduction_factor: p.reduction_factor.to_wire(),
            minting_rewards_distribution_start_epoch: p.minting_rewards_distribution_start_epoch,
        }
    }
}

impl TryFrom<Params> for crate::params::Params {
    type Error = MintError;

    fn try_from(p: Params) -> Result<Self, Self::Error> {
        Ok(Self {
            inflation_rate_change: dec_from_wire("inflation_rate_change", &p.inflation_rate_change)?,
            inflation_max: dec_from_wire("inflation_max", &p.inflation_max)?,
            inflation_min: dec_from_wire("inflation_min", &p.inflation_min)?,
            goal_bonded: dec_from_wire("goal_bonded", &p.goal_bonded)?,
            blocks_per_year: p.blocks_per_year,
            max_supply: int_from_wire("max_supply", &p.max_supply)?,
            reduction_period_in_epochs: p.reduction_period_in_epochs,
            reduction_factor: dec_from_wire("reduction_factor", &p.reduction_factor)?,
            minting_rewards_distribution_start_epoch: p.minting_rewards_distribution_start_epoch,
            mint_denom: p.mint_denom,
            epoch_identifier: p.epoch_identifier,
        })
    }
}

impl From<&crate::minter::Minter> for Minter {
    fn from(m: &crate::minter::Minter) -> Self {
        Self {
            inflation: m.inflation.to_wire(),
            annual_provisions: m.annual_provisions.to_wire(),
            epoch_provisions: m.epoch_provisions.to_wire(),
        }
    }
}

impl TryFrom<Minter> for crate::minter::Minter {
    type Error = MintError;

    fn try_from(m: Minter) -> Result<Self, Self::Error> {
        Ok(Self {
            inflation: dec_from_wire("inflation", &m.inflation)?,
            annual_provisions: dec_from_wire("annual_provisions", &m.annual_provisions)?,
            epoch_provisions: dec_from_wire("epoch_provisions", &m.epoch_provisions)?,
        })
    }
}

impl From<&crate::genesis::GenesisState> for GenesisState {
    fn from(g: &crate::genesis::GenesisState) -> Self {
        Self {
            minter: Some(Minter::from(&g.minter)),
            params: Some(Params::from(&g.params)),
            last_reduction_epoch: g.last_reduction_epoch,
        }
    }
}

impl TryFrom<GenesisState> for crate::genesis::GenesisState {
    type Error = MintError;

    fn try_from(g: GenesisState) -> Result<Self, Self::Error> {
        let minter = g
            .minter
            .ok_or_else(|| MintError::InvalidGenesis("missing minter".to_string()))?;
        let params = g
            .params
            .ok_or_else(|| MintError::InvalidGenesis("missing params".to_string()))?;
        Ok(Self {
            minter: minter.try_into()?,
            params: params.try_into()?,
            last_reduction_epoch: g.last_reduction_epoch,
        })
    }
}
