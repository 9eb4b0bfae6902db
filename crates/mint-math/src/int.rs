// crates/mint-math/src/int.rs
//
// Signed 256-bit integer used for coin amounts, supplies and as the backing
// store of `Dec`.
//
// Represented in sign-magnitude form over `primitive_types::U256`. Zero is
// always stored with a positive sign so that derived equality and hashing
// agree with numeric equality.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MathError;

/// A signed integer with a 256-bit magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Int {
    negative: bool,
    magnitude: U256,
}

impl Int {
    /// Build an `Int` from a sign and a magnitude, normalizing negative zero.
    pub fn from_parts(negative: bool, magnitude: U256) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    /// Zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// One.
    pub fn one() -> Self {
        Self::from(1u64)
    }

    /// Absolute value as an unsigned 256-bit integer.
    pub fn magnitude(&self) -> U256 {
        self.magnitude
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_positive(&self) -> bool {
        !self.negative && !self.magnitude.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self::from_parts(false, self.magnitude)
    }

    pub fn neg(&self) -> Self {
        Self::from_parts(!self.negative, self.magnitude)
    }

    /// Exact addition. Fails with `Overflow` past 256 bits of magnitude.
    pub fn checked_add(&self, rhs: &Int) -> Result<Int, MathError> {
        if self.negative == rhs.negative {
            let magnitude = self
                .magnitude
                .checked_add(rhs.magnitude)
                .ok_or(MathError::Overflow)?;
            return Ok(Self::from_parts(self.negative, magnitude));
        }

        // Opposite signs: the result takes the sign of the larger magnitude.
        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Equal => Ok(Self::zero()),
            Ordering::Greater => Ok(Self::from_parts(
                self.negative,
                self.magnitude - rhs.magnitude,
            )),
            Ordering::Less => Ok(Self::from_parts(rhs.negative, rhs.magnitude - self.magnitude)),
        }
    }

    /// Exact subtraction.
    pub fn checked_sub(&self, rhs: &Int) -> Result<Int, MathError> {
        self.checked_add(&rhs.neg())
    }

    /// Exact multiplication.
    pub fn checked_mul(&self, rhs: &Int) -> Result<Int, MathError> {
        let magnitude = self
            .magnitude
            .checked_mul(rhs.magnitude)
            .ok_or(MathError::Overflow)?;
        Ok(Self::from_parts(self.negative != rhs.negative, magnitude))
    }

    /// Integer division truncating toward zero.
    pub fn checked_quo(&self, rhs: &Int) -> Result<Int, MathError> {
        if rhs.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::from_parts(
            self.negative != rhs.negative,
            self.magnitude / rhs.magnitude,
        ))
    }

    /// Remainder of truncated division; carries the sign of the dividend.
    pub fn checked_rem(&self, rhs: &Int) -> Result<Int, MathError> {
        if rhs.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::from_parts(self.negative, self.magnitude % rhs.magnitude))
    }

    pub fn min(self, other: Int) -> Int {
        std::cmp::min(self, other)
    }

    pub fn max(self, other: Int) -> Int {
        std::cmp::max(self, other)
    }

    /// Convert to `u64` if non-negative and in range.
    pub fn to_u64(&self) -> Option<u64> {
        if self.negative || self.magnitude > U256::from(u64::MAX) {
            return None;
        }
        Some(self.magnitude.low_u64())
    }

    /// Convert to `i64` if in range.
    pub fn to_i64(&self) -> Option<i64> {
        if self.magnitude > U256::from(u64::MAX) {
            return None;
        }
        let raw = self.magnitude.low_u64();
        if self.negative {
            if raw > i64::MAX as u64 + 1 {
                None
            } else {
                Some((raw as i64).wrapping_neg())
            }
        } else {
            i64::try_from(raw).ok()
        }
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for Int {
    fn from(v: u64) -> Self {
        Self::from_parts(false, U256::from(v))
    }
}

impl From<u128> for Int {
    fn from(v: u128) -> Self {
        Self::from_parts(false, U256::from(v))
    }
}

impl From<i64> for Int {
    fn from(v: i64) -> Self {
        Self::from_parts(v < 0, U256::from(v.unsigned_abs()))
    }
}

impl From<U256> for Int {
    fn from(v: U256) -> Self {
        Self::from_parts(false, v)
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

/// Parse an unsigned run of ASCII digits into a magnitude.
pub(crate) fn parse_magnitude(digits: &str) -> Result<U256, MathError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MathError::Malformed(format!("invalid digits: {:?}", digits)));
    }
    U256::from_dec_str(digits).map_err(|_| MathError::Overflow)
}

impl FromStr for Int {
    type Err = MathError;

    /// Accepts an optional leading `-` followed by one or more ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let magnitude = parse_magnitude(digits)
            .map_err(|e| match e {
                MathError::Malformed(_) => MathError::Malformed(format!("invalid integer: {:?}", s)),
                other => other,
            })?;
        Ok(Self::from_parts(negative, magnitude))
    }
}

impl Serialize for Int {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> Int {
        s.parse().unwrap()
    }

    #[test]
    fn test_negative_zero_normalizes() {
        let z = Int::from_parts(true, U256::zero());
        assert!(!z.is_negative());
        assert_eq!(z, Int::zero());
        assert_eq!(int("-0"), Int::zero());
        assert_eq!(int("-0").to_string(), "0");
    }

    #[test]
    fn test_add_mixed_signs() {
        assert_eq!(int("5").checked_add(&int("-7")).unwrap(), int("-2"));
        assert_eq!(int("-5").checked_add(&int("7")).unwrap(), int("2"));
        assert_eq!(int("-5").checked_add(&int("5")).unwrap(), Int::zero());
        assert_eq!(int("-5").checked_add(&int("-5")).unwrap(), int("-10"));
    }

    #[test]
    fn test_sub() {
        assert_eq!(int("3").checked_sub(&int("10")).unwrap(), int("-7"));
        assert_eq!(int("-3").checked_sub(&int("-10")).unwrap(), int("7"));
    }

    #[test]
    fn test_quo_truncates_toward_zero() {
        assert_eq!(int("7").checked_quo(&int("2")).unwrap(), int("3"));
        assert_eq!(int("-7").checked_quo(&int("2")).unwrap(), int("-3"));
        assert_eq!(int("7").checked_quo(&int("-2")).unwrap(), int("-3"));
        assert_eq!(int("-7").checked_rem(&int("2")).unwrap(), int("-1"));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            int("1").checked_quo(&Int::zero()),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            int("1").checked_rem(&Int::zero()),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        let max = Int::from(U256::MAX);
        assert_eq!(max.checked_add(&Int::one()), Err(MathError::Overflow));
        assert_eq!(max.checked_mul(&int("2")), Err(MathError::Overflow));
        // Opposite-sign addition never overflows.
        assert!(max.checked_add(&max.neg()).unwrap().is_zero());
    }

    #[test]
    fn test_ordering() {
        let mut values = vec![int("3"), int("-10"), int("0"), int("-2"), int("12")];
        values.sort();
        assert_eq!(
            values,
            vec![int("-10"), int("-2"), int("0"), int("3"), int("12")]
        );
        assert_eq!(int("-4").max(int("-9")), int("-4"));
        assert_eq!(int("-4").min(int("-9")), int("-9"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "-", "+5", "1.0", "12a", " 1", "1_000", "--1"] {
            assert!(bad.parse::<Int>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_parse_overflow() {
        let too_big = format!("{}0", U256::MAX);
        assert_eq!(too_big.parse::<Int>(), Err(MathError::Overflow));
    }

    #[test]
    fn test_primitive_conversions() {
        assert_eq!(Int::from(-42i64).to_string(), "-42");
        assert_eq!(Int::from(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(Int::from(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(Int::from(u64::MAX).to_i64(), None);
        assert_eq!(int("-1").to_u64(), None);
        assert_eq!(Int::from(u128::MAX).to_u64(), None);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&int("-1234")).unwrap();
        assert_eq!(json, "\"-1234\"");
        let back: Int = serde_json::from_str(&json).unwrap();
        assert_eq!(back, int("-1234"));
        assert!(serde_json::from_str::<Int>("\"abc\"").is_err());
    }
}
