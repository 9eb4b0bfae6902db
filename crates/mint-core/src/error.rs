use mint_math::MathError;
use thiserror::Error;

/// Error type shared by every layer of the mint module.
#[derive(Debug, Error)]
pub enum MintError {
    /// A parameter value violates a validation rule.
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// A genesis record is inconsistent or fails validation.
    #[error("Invalid genesis: {0}")]
    InvalidGenesis(String),

    /// The signer of a parameter update is not the module authority.
    #[error("Unauthorized: expected authority {expected}, got {got}")]
    Unauthorized { expected: String, got: String },

    /// Mint or transfer rejected by the bank adapter.
    #[error("Bank error: {0}")]
    Bank(String),

    /// Bonded ratio or staking supply unavailable.
    #[error("Staking error: {0}")]
    Staking(String),

    /// Module account lookup or creation failed.
    #[error("Account error: {0}")]
    Account(String),

    /// A state key that must exist after genesis is missing.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    /// A decimal or integer string could not be parsed.
    #[error("Malformed decimal: {0}")]
    MalformedDecimal(String),

    /// KV backend failure (RocksDB, cache commit).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Encoding or decoding of a persisted record failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The event sink refused an event.
    #[error("Event sink error: {0}")]
    EventSink(String),
}

impl MintError {
    /// Whether the error must halt the enclosing block rather than being
    /// reported back to a transaction sender.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            MintError::InvalidParams(_)
                | MintError::InvalidGenesis(_)
                | MintError::Unauthorized { .. }
                | MintError::MalformedDecimal(_)
        )
    }
}

impl From<MathError> for MintError {
    fn from(e: MathError) -> Self {
        match e {
            MathError::DivisionByZero => MintError::DivisionByZero,
            MathError::Overflow => MintError::ArithmeticOverflow,
            MathError::Malformed(msg) => MintError::MalformedDecimal(msg),
        }
    }
}

impl From<prost::DecodeError> for MintError {
    fn from(e: prost::DecodeError) -> Self {
        MintError::Serialization(e.to_string())
    }
}

impl From<prost::EncodeError> for MintError {
    fn from(e: prost::EncodeError) -> Self {
        MintError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for MintError {
    fn from(e: serde_json::Error) -> Self {
        MintError::Serialization(e.to_string())
    }
}
