use thiserror::Error;

/// Errors raised by fixed-point and integer arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Division (or remainder) by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in the 256-bit backing integer.
    #[error("arithmetic overflow")]
    Overflow,

    /// A string could not be parsed as a decimal or integer.
    #[error("malformed number: {0}")]
    Malformed(String),
}
