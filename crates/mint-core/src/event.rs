// crates/mint-core/src/event.rs
//
// Audit event emitted after every mint cycle.
//
// Block regime attributes: bonded_ratio, inflation, annual_provisions, amount.
// Epoch regime attributes: epoch_number, epoch_provisions, amount.
// Values are canonical decimal or integer strings.

use serde::{Deserialize, Serialize};

use mint_math::{Dec, Int};

pub const EVENT_TYPE_MINT: &str = "mint";

pub const ATTRIBUTE_KEY_BONDED_RATIO: &str = "bonded_ratio";
pub const ATTRIBUTE_KEY_INFLATION: &str = "inflation";
pub const ATTRIBUTE_KEY_ANNUAL_PROVISIONS: &str = "annual_provisions";
pub const ATTRIBUTE_KEY_EPOCH_NUMBER: &str = "epoch_number";
pub const ATTRIBUTE_KEY_EPOCH_PROVISIONS: &str = "epoch_provisions";
pub const ATTRIBUTE_KEY_AMOUNT: &str = "amount";

/// A single key/value attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
}

/// A typed event with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: Vec<EventAttribute>,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(EventAttribute {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Value of the first attribute with the given key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Event for a block-regime mint.
    pub fn block_mint(bonded_ratio: &Dec, inflation: &Dec, annual_provisions: &Dec, amount: &Int) -> Self {
        Self::new(EVENT_TYPE_MINT)
            .with_attribute(ATTRIBUTE_KEY_BONDED_RATIO, bonded_ratio.to_string())
            .with_attribute(ATTRIBUTE_KEY_INFLATION, inflation.to_string())
            .with_attribute(ATTRIBUTE_KEY_ANNUAL_PROVISIONS, annual_provisions.to_string())
            .with_attribute(ATTRIBUTE_KEY_AMOUNT, amount.to_string())
    }

    /// Event for an epoch-regime mint.
    pub fn epoch_mint(epoch_number: i64, epoch_provisions: &Dec, amount: &Int) -> Self {
        Self::new(EVENT_TYPE_MINT)
            .with_attribute(ATTRIBUTE_KEY_EPOCH_NUMBER, epoch_number.to_string())
            .with_attribute(ATTRIBUTE_KEY_EPOCH_PROVISIONS, epoch_provisions.to_string())
            .with_attribute(ATTRIBUTE_KEY_AMOUNT, amount.to_string())
    }
}
