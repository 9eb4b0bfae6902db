// crates/mint-core/src/coin.rs
//
// Coin amounts and denomination rules.
//
// A denom is 3..=128 characters: an ASCII letter followed by letters,
// digits, or any of `/ : . _ -`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MintError;
use mint_math::Int;

const DENOM_MIN_LEN: usize = 3;
const DENOM_MAX_LEN: usize = 128;

/// Check a denomination against the chain's denom grammar.
pub fn validate_denom(denom: &str) -> Result<(), String> {
    let len = denom.len();
    if !(DENOM_MIN_LEN..=DENOM_MAX_LEN).contains(&len) {
        return Err(format!(
            "invalid denom: {:?} (length must be between {} and {})",
            denom, DENOM_MIN_LEN, DENOM_MAX_LEN
        ));
    }
    let mut bytes = denom.bytes();
    let first_ok = bytes.next().is_some_and(|b| b.is_ascii_alphabetic());
    let rest_ok = bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'/' | b':' | b'.' | b'_' | b'-'));
    if !first_ok || !rest_ok {
        return Err(format!("invalid denom: {:?}", denom));
    }
    Ok(())
}

/// A quantity of a single denomination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Int,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: Int) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Zero of the given denom.
    pub fn zero(denom: impl Into<String>) -> Self {
        Self::new(denom, Int::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    /// A coin is valid if its denom parses and its amount is not negative.
    pub fn validate(&self) -> Result<(), MintError> {
        validate_denom(&self.denom).map_err(MintError::InvalidParams)?;
        if self.amount.is_negative() {
            return Err(MintError::InvalidParams(format!(
                "negative coin amount: {}",
                self
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
