// crates/mint-math/src/dec.rs
//
// 18-digit fixed-point decimal.
//
// A `Dec` is an `Int` scaled by 10^18. Products and quotients are computed
// on a 512-bit intermediate and narrowed back to 256 bits, so the only
// overflow is a genuinely out-of-range result.
//
// Rounding follows the legacy decimal rules the chain has always used:
//   - `checked_mul` / `checked_quo` round half-to-even at the 18th digit
//     (the quotient is first truncated at 36 digits, then chopped).
//   - `*_truncate` variants truncate toward zero.
//   - `*_round_up` variants round toward positive infinity.

use std::fmt;
use std::str::FromStr;

use primitive_types::{U256, U512};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MathError;
use crate::int::{parse_magnitude, Int};

/// Number of fractional decimal digits carried by `Dec`.
pub const PRECISION: usize = 18;

fn precision_multiplier() -> U256 {
    U256::exp10(PRECISION)
}

#[derive(Clone, Copy)]
enum Rounding {
    HalfEven,
    Truncate,
    Ceiling,
}

/// Divide a non-negative 512-bit numerator, applying `mode` to the
/// remainder. `negative` is the sign of the final result; ceiling only
/// bumps the magnitude of positive results.
fn div_round(numerator: U512, divisor: U512, mode: Rounding, negative: bool) -> U512 {
    let (quotient, remainder) = numerator.div_mod(divisor);
    if remainder.is_zero() {
        return quotient;
    }
    match mode {
        Rounding::Truncate => quotient,
        Rounding::Ceiling => {
            if negative {
                quotient
            } else {
                quotient + U512::one()
            }
        }
        Rounding::HalfEven => {
            let doubled = remainder + remainder;
            match doubled.cmp(&divisor) {
                std::cmp::Ordering::Less => quotient,
                std::cmp::Ordering::Greater => quotient + U512::one(),
                std::cmp::Ordering::Equal => {
                    if quotient.bit(0) {
                        quotient + U512::one()
                    } else {
                        quotient
                    }
                }
            }
        }
    }
}

fn narrow(value: U512) -> Result<U256, MathError> {
    U256::try_from(value).map_err(|_| MathError::Overflow)
}

/// A signed decimal with exactly 18 fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Dec(Int);

impl Dec {
    pub fn zero() -> Self {
        Dec(Int::zero())
    }

    pub fn one() -> Self {
        Dec(Int::from_parts(false, precision_multiplier()))
    }

    /// Wrap an already-scaled backing integer.
    pub fn from_raw(raw: Int) -> Self {
        Dec(raw)
    }

    /// The backing integer (value × 10^18).
    pub fn raw(&self) -> Int {
        self.0
    }

    /// Lift an integer into a decimal. Fails if `i × 10^18` exceeds 256 bits.
    pub fn from_int(i: Int) -> Result<Self, MathError> {
        let scaled = i
            .magnitude()
            .checked_mul(precision_multiplier())
            .ok_or(MathError::Overflow)?;
        Ok(Dec(Int::from_parts(i.is_negative(), scaled)))
    }

    pub fn from_u64(v: u64) -> Self {
        // u64::MAX × 10^18 is far below 2^256.
        Dec(Int::from_parts(false, U256::from(v) * precision_multiplier()))
    }

    /// `value × 10^-prec`, e.g. `new_with_prec(13, 2) == 0.13`.
    ///
    /// # Panics
    /// Panics if `prec > 18`.
    pub fn new_with_prec(value: i64, prec: u32) -> Self {
        assert!(
            prec as usize <= PRECISION,
            "precision {} exceeds maximum of {}",
            prec,
            PRECISION
        );
        let scale = U256::exp10(PRECISION - prec as usize);
        let magnitude = U256::from(value.unsigned_abs()) * scale;
        Dec(Int::from_parts(value < 0, magnitude))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn abs(&self) -> Self {
        Dec(self.0.abs())
    }

    pub fn neg(&self) -> Self {
        Dec(self.0.neg())
    }

    pub fn min(self, other: Dec) -> Dec {
        std::cmp::min(self, other)
    }

    pub fn max(self, other: Dec) -> Dec {
        std::cmp::max(self, other)
    }

    /// Clamp into `[lo, hi]`, inclusive on both ends. `lo` wins if `lo > hi`.
    pub fn clamp(self, lo: Dec, hi: Dec) -> Dec {
        if self > hi {
            return hi.max(lo);
        }
        if self < lo {
            return lo;
        }
        self
    }

    pub fn checked_add(&self, rhs: &Dec) -> Result<Dec, MathError> {
        Ok(Dec(self.0.checked_add(&rhs.0)?))
    }

    pub fn checked_sub(&self, rhs: &Dec) -> Result<Dec, MathError> {
        Ok(Dec(self.0.checked_sub(&rhs.0)?))
    }

    fn mul_with(&self, rhs: &Dec, mode: Rounding) -> Result<Dec, MathError> {
        let negative = self.is_negative() != rhs.is_negative();
        let product = self.0.magnitude().full_mul(rhs.0.magnitude());
        let chopped = div_round(product, U512::from(precision_multiplier()), mode, negative);
        Ok(Dec(Int::from_parts(negative, narrow(chopped)?)))
    }

    /// Multiply, rounding half-to-even at the 18th fractional digit.
    pub fn checked_mul(&self, rhs: &Dec) -> Result<Dec, MathError> {
        self.mul_with(rhs, Rounding::HalfEven)
    }

    /// Multiply, truncating toward zero.
    pub fn checked_mul_truncate(&self, rhs: &Dec) -> Result<Dec, MathError> {
        self.mul_with(rhs, Rounding::Truncate)
    }

    /// Multiply, rounding toward positive infinity.
    pub fn checked_mul_round_up(&self, rhs: &Dec) -> Result<Dec, MathError> {
        self.mul_with(rhs, Rounding::Ceiling)
    }

    /// Exact multiplication by an integer.
    pub fn checked_mul_int(&self, rhs: &Int) -> Result<Dec, MathError> {
        Ok(Dec(self.0.checked_mul(rhs)?))
    }

    /// Divide, rounding half-to-even at the 18th fractional digit.
    ///
    /// The numerator is scaled by 10^36 and truncated before the final chop,
    /// matching the legacy decimal library bit for bit.
    pub fn checked_quo(&self, rhs: &Dec) -> Result<Dec, MathError> {
        if rhs.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let negative = self.is_negative() != rhs.is_negative();
        let scale = U512::from(precision_multiplier());
        let numerator = U512::from(self.0.magnitude()) * scale * scale;
        let wide = numerator / U512::from(rhs.0.magnitude());
        let chopped = div_round(wide, scale, Rounding::HalfEven, negative);
        Ok(Dec(Int::from_parts(negative, narrow(chopped)?)))
    }

    fn quo_with(&self, rhs: &Dec, mode: Rounding) -> Result<Dec, MathError> {
        if rhs.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let negative = self.is_negative() != rhs.is_negative();
        let numerator = self.0.magnitude().full_mul(precision_multiplier());
        let quotient = div_round(numerator, U512::from(rhs.0.magnitude()), mode, negative);
        Ok(Dec(Int::from_parts(negative, narrow(quotient)?)))
    }

    /// Divide, truncating toward zero.
    pub fn checked_quo_truncate(&self, rhs: &Dec) -> Result<Dec, MathError> {
        self.quo_with(rhs, Rounding::Truncate)
    }

    /// Divide, rounding toward positive infinity.
    pub fn checked_quo_round_up(&self, rhs: &Dec) -> Result<Dec, MathError> {
        self.quo_with(rhs, Rounding::Ceiling)
    }

    /// Divide by an integer, truncating toward zero.
    pub fn checked_quo_int(&self, rhs: &Int) -> Result<Dec, MathError> {
        Ok(Dec(self.0.checked_quo(rhs)?))
    }

    /// Integer part, discarding the fractional digits (toward zero).
    pub fn truncate_int(&self) -> Int {
        let whole = self.0.magnitude() / precision_multiplier();
        Int::from_parts(self.is_negative(), whole)
    }

    /// Nearest integer, ties to even.
    pub fn round_int(&self) -> Int {
        let rounded = div_round(
            U512::from(self.0.magnitude()),
            U512::from(precision_multiplier()),
            Rounding::HalfEven,
            self.is_negative(),
        );
        // Dividing by 10^18 always shrinks the value back under 256 bits.
        Int::from_parts(self.is_negative(), U256::try_from(rounded).unwrap_or_default())
    }

    /// Smallest integral decimal not less than `self`.
    pub fn ceil(&self) -> Result<Dec, MathError> {
        let (whole, frac) = self.0.magnitude().div_mod(precision_multiplier());
        let whole = if !frac.is_zero() && !self.is_negative() {
            whole + U256::one()
        } else {
            whole
        };
        Dec::from_int(Int::from_parts(self.is_negative(), whole))
    }

    /// Wire form: the backing integer's decimal digits, as carried by the
    /// protobuf `LegacyDec` custom type.
    pub fn to_wire(&self) -> String {
        self.0.to_string()
    }

    /// Inverse of `to_wire`. The empty string decodes to zero.
    pub fn from_wire(s: &str) -> Result<Dec, MathError> {
        if s.is_empty() {
            return Ok(Dec::zero());
        }
        Ok(Dec(s.parse()?))
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, frac) = self.0.magnitude().div_mod(precision_multiplier());
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:0>width$}", sign, whole, frac.to_string(), width = PRECISION)
    }
}

impl FromStr for Dec {
    type Err = MathError;

    /// Parse `-?<digits>[.<1..=18 digits>]`.
    ///
    /// Rejects empty input, a bare point, a missing integer or fractional
    /// part around the point, more than one point, more than 18 fractional
    /// digits, and any non-digit character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| MathError::Malformed(format!("{:?}: {}", s, reason));

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(malformed("empty decimal string"));
        }

        let mut parts = body.split('.');
        let int_part = parts.next().unwrap_or_default();
        let frac_part = parts.next();
        if parts.next().is_some() {
            return Err(malformed("too many decimal points"));
        }

        let frac_part = match frac_part {
            Some(frac) => {
                if frac.is_empty() || int_part.is_empty() {
                    return Err(malformed("invalid decimal length"));
                }
                if frac.len() > PRECISION {
                    return Err(malformed("too many fractional digits"));
                }
                frac
            }
            None => "",
        };

        let combined = format!("{}{}{}", int_part, frac_part, "0".repeat(PRECISION - frac_part.len()));
        let magnitude = parse_magnitude(&combined).map_err(|e| match e {
            MathError::Malformed(_) => malformed("invalid character"),
            other => other,
        })?;
        Ok(Dec(Int::from_parts(negative, magnitude)))
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_canonical() {
        assert_eq!(Dec::zero().to_string(), "0.000000000000000000");
        assert_eq!(Dec::one().to_string(), "1.000000000000000000");
        assert_eq!(Dec::from_u64(12340).to_string(), "12340.000000000000000000");
        assert_eq!(Dec::new_with_prec(12340, 4).to_string(), "1.234000000000000000");
        assert_eq!(Dec::new_with_prec(12340, 8).to_string(), "0.000123400000000000");
        assert_eq!(Dec::new_with_prec(-5, 1).to_string(), "-0.500000000000000000");
    }

    #[test]
    fn test_parse_accepts() {
        assert_eq!(dec("0"), Dec::zero());
        assert_eq!(dec("1"), Dec::one());
        assert_eq!(dec("1.1"), Dec::new_with_prec(11, 1));
        assert_eq!(dec("0.75"), Dec::new_with_prec(75, 2));
        assert_eq!(dec("0.11111"), Dec::new_with_prec(11111, 5));
        assert_eq!(dec("-0.75"), Dec::new_with_prec(-75, 2));
        assert_eq!(dec("0.000000000000000001").raw(), Int::one());
    }

    #[test]
    fn test_parse_rejects() {
        for bad in [
            "",
            "-",
            ".",
            ".0",
            "1.",
            "0.-75",
            "foobar",
            "0.foobar",
            "0.foobar.",
            "1.2.3",
            "1,5",
            "1 ",
            "+1",
            "0.1234567890123456789",
        ] {
            assert!(bad.parse::<Dec>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_parse_overflow() {
        let huge = format!("{}", U256::MAX);
        assert_eq!(huge.parse::<Dec>(), Err(MathError::Overflow));
    }

    #[test]
    fn test_arithmetic_table() {
        // (a, b, mul, mul_truncate, mul_round_up, quo, quo_round_up, quo_truncate, add, sub)
        let cases = [
            ("3", "7", "21", "21", "21", "0.428571428571428571", "0.428571428571428572", "0.428571428571428571", "10", "-4"),
            ("2", "4", "8", "8", "8", "0.5", "0.5", "0.5", "6", "-2"),
            ("100", "100", "10000", "10000", "10000", "1", "1", "1", "200", "0"),
            ("1.5", "1.5", "2.25", "2.25", "2.25", "1", "1", "1", "3", "0"),
            ("0.3333", "0.0333", "0.01109889", "0.01109889", "0.01109889", "10.009009009009009009", "10.009009009009009010", "10.009009009009009009", "0.3666", "0.3"),
            ("-1", "1", "-1", "-1", "-1", "-1", "-1", "-1", "0", "-2"),
            ("-1", "-1", "1", "1", "1", "1", "1", "1", "-2", "0"),
        ];
        for (a, b, mul, mul_t, mul_u, quo, quo_u, quo_t, add, sub) in cases {
            let (a, b) = (dec(a), dec(b));
            assert_eq!(a.checked_mul(&b).unwrap(), dec(mul), "mul {} {}", a, b);
            assert_eq!(a.checked_mul_truncate(&b).unwrap(), dec(mul_t));
            assert_eq!(a.checked_mul_round_up(&b).unwrap(), dec(mul_u));
            assert_eq!(a.checked_quo(&b).unwrap(), dec(quo), "quo {} {}", a, b);
            assert_eq!(a.checked_quo_round_up(&b).unwrap(), dec(quo_u));
            assert_eq!(a.checked_quo_truncate(&b).unwrap(), dec(quo_t));
            assert_eq!(a.checked_add(&b).unwrap(), dec(add));
            assert_eq!(a.checked_sub(&b).unwrap(), dec(sub));
        }
    }

    #[test]
    fn test_mul_rounding_at_precision_end() {
        let tiny = dec("0.000000000000000009");
        assert_eq!(tiny.checked_mul_round_up(&tiny).unwrap(), dec("0.000000000000000001"));
        assert_eq!(tiny.checked_mul_truncate(&tiny).unwrap(), Dec::zero());
        assert_eq!(tiny.checked_mul(&tiny).unwrap(), Dec::zero());
    }

    #[test]
    fn test_quo_two_thirds_rounds_last_digit() {
        let two_thirds = Dec::from_u64(2).checked_quo(&Dec::from_u64(3)).unwrap();
        assert_eq!(two_thirds.to_string(), "0.666666666666666667");
        let truncated = Dec::from_u64(2).checked_quo_truncate(&Dec::from_u64(3)).unwrap();
        assert_eq!(truncated.to_string(), "0.666666666666666666");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Dec::one().checked_quo(&Dec::zero()), Err(MathError::DivisionByZero));
        assert_eq!(Dec::one().checked_quo_truncate(&Dec::zero()), Err(MathError::DivisionByZero));
        assert_eq!(Dec::one().checked_quo_int(&Int::zero()), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_mul_overflow() {
        let big = Dec::from_raw(Int::from(U256::MAX));
        assert_eq!(big.checked_mul(&Dec::from_u64(2)), Err(MathError::Overflow));
        assert!(Dec::from_int(Int::from(U256::MAX)).is_err());
    }

    #[test]
    fn test_banker_round_int() {
        let cases = [
            ("0.25", 0i64),
            ("0", 0),
            ("1", 1),
            ("0.75", 1),
            ("0.5", 0),
            ("7.5", 8),
            ("1.5", 2),
            ("2.5", 2),
            ("0.545", 1),
            ("1.545", 2),
        ];
        for (input, expected) in cases {
            assert_eq!(dec(input).round_int(), Int::from(expected), "round {}", input);
            assert_eq!(dec(input).neg().round_int(), Int::from(-expected), "round -{}", input);
        }
    }

    #[test]
    fn test_truncate_and_ceil() {
        assert_eq!(dec("2.9").truncate_int(), Int::from(2i64));
        assert_eq!(dec("-2.9").truncate_int(), Int::from(-2i64));
        assert_eq!(dec("2.1").ceil().unwrap(), dec("3"));
        assert_eq!(dec("-2.1").ceil().unwrap(), dec("-2"));
        assert_eq!(dec("4").ceil().unwrap(), dec("4"));
    }

    #[test]
    fn test_int_interop() {
        let annual = dec("1000.5");
        assert_eq!(annual.checked_quo_int(&Int::from(3u64)).unwrap(), dec("333.5"));
        assert_eq!(
            dec("0.13").checked_mul_int(&Int::from(1_000_000u64)).unwrap(),
            dec("130000")
        );
    }

    #[test]
    fn test_clamp_inclusive() {
        let lo = dec("0.07");
        let hi = dec("0.2");
        assert_eq!(dec("0.05").clamp(lo, hi), lo);
        assert_eq!(dec("0.25").clamp(lo, hi), hi);
        assert_eq!(dec("0.07").clamp(lo, hi), lo);
        assert_eq!(dec("0.2").clamp(lo, hi), hi);
        assert_eq!(dec("0.1").clamp(lo, hi), dec("0.1"));
    }

    #[test]
    fn test_wire_form() {
        assert_eq!(dec("0.13").to_wire(), "130000000000000000");
        assert_eq!(Dec::from_wire("130000000000000000").unwrap(), dec("0.13"));
        assert_eq!(Dec::from_wire("").unwrap(), Dec::zero());
        assert!(Dec::from_wire("0.13").is_err());
    }

    #[test]
    fn test_serde_canonical_string() {
        let json = serde_json::to_string(&dec("0.67")).unwrap();
        assert_eq!(json, "\"0.670000000000000000\"");
        let back: Dec = serde_json::from_str("\"0.67\"").unwrap();
        assert_eq!(back, dec("0.67"));
    }

    fn arb_dec() -> impl Strategy<Value = Dec> {
        (any::<i64>(), 0u32..=18).prop_map(|(v, p)| Dec::new_with_prec(v, p))
    }

    proptest! {
        #[test]
        fn prop_string_round_trip(d in arb_dec()) {
            prop_assert_eq!(d.to_string().parse::<Dec>().unwrap(), d);
            prop_assert_eq!(Dec::from_wire(&d.to_wire()).unwrap(), d);
        }

        #[test]
        fn prop_add_sub_inverse(a in arb_dec(), b in arb_dec()) {
            let sum = a.checked_add(&b).unwrap();
            prop_assert_eq!(sum.checked_sub(&b).unwrap(), a);
        }

        #[test]
        fn prop_mul_quo_within_last_digit(a in arb_dec(), b in 1u64..1_000_000_000) {
            let b = Dec::new_with_prec(b as i64, 3);
            let back = a.checked_mul(&b).unwrap().checked_quo(&b).unwrap();
            let diff = back.checked_sub(&a).unwrap().abs();
            // One ulp of the product, magnified by 1/b (b >= 0.001).
            prop_assert!(diff <= Dec::new_with_prec(1000, 18));
        }

        #[test]
        fn prop_truncated_quo_never_exceeds_exact(a in 0i64..i64::MAX, b in 1i64..i64::MAX) {
            let q = Dec::from_u64(a as u64).checked_quo_truncate(&Dec::from_u64(b as u64)).unwrap();
            let back = q.checked_mul_truncate(&Dec::from_u64(b as u64)).unwrap();
            prop_assert!(back <= Dec::from_u64(a as u64));
        }
    }
}
