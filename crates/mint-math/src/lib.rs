// crates/mint-math/src/lib.rs
//
// mint-math: Fixed-point arithmetic for the mint module.
//
// Every validator must derive bit-identical provisions from the same inputs,
// so no floating point is used anywhere. `Dec` carries exactly 18 fractional
// digits over a signed 256-bit backing integer; `Int` is the integer-only
// companion used for coin amounts and supplies.

pub mod dec;
pub mod error;
pub mod int;

pub use dec::{Dec, PRECISION};
pub use error::MathError;
pub use int::Int;
