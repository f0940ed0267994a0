// ============================================================================
// Number
// Integer/float numeric tower with promotion and checked division
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric value accepted by the calculator.
///
/// Integers stay integers under `+`, `-` and `*`; any float operand promotes
/// the result to a float. Integer overflow also promotes to float, so
/// arithmetic on `Number` never panics.
///
/// Equality and ordering compare numeric value across variants, so
/// `Number::Integer(5) == Number::Float(5.0)`.
///
/// # Example
/// ```
/// use checked_calculator::numeric::Number;
///
/// let sum = Number::Integer(2) + Number::Integer(3);
/// assert_eq!(sum, Number::Integer(5));
///
/// let product = Number::Float(2.5) * Number::Integer(4);
/// assert_eq!(product.to_string(), "10.0");
///
/// let quotient = Number::Integer(10).checked_div(Number::Integer(4)).unwrap();
/// assert_eq!(quotient, 2.5);
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// Whole number
    Integer(i64),
    /// IEEE 754 double
    Float(f64),
}

impl Number {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// Value as an `f64` (lossy above 2^53 for integers).
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Check if value is an integer.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Check if value is a float.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Check if value is zero. Both `0.0` and `-0.0` count.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Integer(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// True division.
    ///
    /// The result is always a float, even for two integers that divide
    /// evenly (`10 / 2 == 5.0`).
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        // Exact integer quotients are rounded once, not once per operand
        if let (Number::Integer(a), Number::Integer(b)) = (self, rhs) {
            if a.checked_rem(b) == Some(0) {
                if let Some(q) = a.checked_div(b) {
                    return Ok(Number::Float(q as f64));
                }
            }
        }
        Ok(Number::Float(self.to_f64() / rhs.to_f64()))
    }

    /// Apply an integer operation, falling back to float on overflow.
    #[inline]
    fn promote(
        self,
        rhs: Self,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Self {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => int_op(a, b)
                .map(Number::Integer)
                .unwrap_or_else(|| Number::Float(float_op(a as f64, b as f64))),
            (a, b) => Number::Float(float_op(a.to_f64(), b.to_f64())),
        }
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add for Number {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.promote(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.promote(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.promote(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl Neg for Number {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Number::Integer(i) => i
                .checked_neg()
                .map(Number::Integer)
                .unwrap_or(Number::Float(-(i as f64))),
            Number::Float(f) => Number::Float(-f),
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// Exact comparison of an integer against a float.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    // 2^63 is exactly representable; anything at or past it is out of i64 range.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f >= LIMIT {
        return Some(Ordering::Less);
    }
    if f < -LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0f64.partial_cmp(&(f - whole)),
        ord => Some(ord),
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Integer(a), Number::Integer(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Integer(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Integer(b)) => {
                cmp_int_float(b, a).map(Ordering::reverse)
            }
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::Integer(*other)
    }
}

impl PartialEq<i32> for Number {
    fn eq(&self, other: &i32) -> bool {
        *self == Number::Integer(i64::from(*other))
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::Float(*other)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "Integer({})", i),
            Number::Float(x) => write!(f, "Float({})", x),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(x) if x.is_nan() => write!(f, "nan"),
            Number::Float(x) if x.is_infinite() => {
                write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" })
            }
            Number::Float(x) if x != 0.0 && (x.abs() < 1e-4 || x.abs() >= 1e16) => {
                write_exponent(f, x)
            }
            // Integral floats keep a trailing ".0" so they read as floats
            Number::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Number {
    type Err = NumericError;

    /// Parse integer or float text.
    ///
    /// # Examples
    /// - "42" -> Integer(42)
    /// - "-2.5" -> Float(-2.5)
    /// - "1e3" -> Float(1000.0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::Integer(i));
        }

        s.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| NumericError::InvalidInput)
    }
}

/// Scientific form with a signed, two-digit exponent: `1e+20`, `1.5e-05`.
fn write_exponent(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let formatted = format!("{:e}", x);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn test_integer_arithmetic_stays_integer() {
        let a = Number::Integer(7);
        let b = Number::Integer(3);

        assert!((a + b).is_integer());
        assert_eq!(a + b, 10);
        assert_eq!(a - b, 4);
        assert_eq!(a * b, 21);
    }

    #[test]
    fn test_mixed_arithmetic_promotes() {
        let product = Number::Float(2.5) * Number::Integer(4);
        assert!(product.is_float());
        assert_eq!(product, 10.0);

        let sum = Number::Integer(1) + Number::Float(0.5);
        assert!(sum.is_float());
        assert_eq!(sum, 1.5);
    }

    #[test]
    fn test_overflow_promotes_to_float() {
        let max = Number::Integer(i64::MAX);
        let sum = max + Number::Integer(1);
        assert!(sum.is_float());
        assert_eq!(sum.to_f64(), i64::MAX as f64 + 1.0);

        let neg = -Number::Integer(i64::MIN);
        assert!(neg.is_float());
    }

    #[test]
    fn test_division_is_true_division() {
        let q = Number::Integer(10).checked_div(Number::Integer(2)).unwrap();
        assert!(q.is_float());
        assert_eq!(q, 5.0);

        let q = Number::Integer(10).checked_div(Number::Integer(4)).unwrap();
        assert_eq!(q, 2.5);
    }

    #[test]
    fn test_division_by_zero() {
        let ten = Number::Integer(10);
        assert_eq!(
            ten.checked_div(Number::Integer(0)),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            ten.checked_div(Number::Float(0.0)),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            ten.checked_div(Number::Float(-0.0)),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_cross_variant_comparison() {
        assert_eq!(Number::Integer(5), Number::Float(5.0));
        assert_ne!(Number::Integer(5), Number::Float(5.5));
        assert!(Number::Integer(5) < Number::Float(5.5));
        assert!(Number::Float(-0.5) < Number::Integer(0));
        assert!(Number::Integer(i64::MAX) < Number::Float(1e19));
        assert_ne!(Number::Float(f64::NAN), Number::Float(f64::NAN));
        assert_eq!(Number::Integer(1).partial_cmp(&Number::Float(f64::NAN)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Integer(5).to_string(), "5");
        assert_eq!(Number::Float(10.0).to_string(), "10.0");
        assert_eq!(Number::Float(-0.25).to_string(), "-0.25");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Number::Float(f64::NAN).to_string(), "nan");
        assert_eq!(Number::Float(1e20).to_string(), "1e+20");
        assert_eq!(Number::Float(1.5e16).to_string(), "1.5e+16");
        assert_eq!(Number::Float(1e16).to_string(), "1e+16");
        assert_eq!(Number::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Number::Float(1e-5).to_string(), "1e-05");
        assert_eq!(Number::Float(-2.5e-7).to_string(), "-2.5e-07");
        assert_eq!(Number::Float(1e-4).to_string(), "0.0001");
        assert_eq!(Number::Float(1e300).to_string(), "1e+300");
        assert_eq!(Number::Float(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_exact_integer_division_rounds_once() {
        // 3 * (2^53 + 1): the operands round up separately as floats
        let q = Number::Integer(27_021_597_764_222_979)
            .checked_div(Number::Integer(3))
            .unwrap();
        assert!(q.is_float());
        assert_eq!(q, Number::Float(9_007_199_254_740_992.0));

        assert_eq!(
            Number::Integer(i64::MIN).checked_div(Number::Integer(-1)),
            Ok(Number::Float(-(i64::MIN as f64)))
        );
        assert_eq!(
            Number::Integer(10).checked_div(Number::Integer(2)),
            Ok(Number::Float(5.0))
        );
        assert_eq!(
            Number::Integer(1).checked_div(Number::Integer(4)),
            Ok(Number::Float(0.25))
        );
    }

    #[test]
    fn test_from_str() {
        let x: Number = "42".parse().unwrap();
        assert!(x.is_integer());
        assert_eq!(x, 42);

        let y: Number = " -2.5 ".parse().unwrap();
        assert!(y.is_float());
        assert_eq!(y, -2.5);

        let z: Number = "1e3".parse().unwrap();
        assert_eq!(z, 1000.0);
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<Number, _> = "text".parse();
        assert_eq!(result, Err(NumericError::InvalidInput));

        let result: Result<Number, _> = "   ".parse();
        assert_eq!(result, Err(NumericError::InvalidInput));
    }

    #[test]
    fn quickcheck_small_integers_match_native_arithmetic() {
        fn prop(a: i32, b: i32) -> bool {
            let (x, y) = (Number::from(a), Number::from(b));
            let (a, b) = (i64::from(a), i64::from(b));
            (x + y) == a + b && (x - y) == a - b && (x * y) == a * b
        }
        quickcheck(prop as fn(i32, i32) -> bool);
    }

    #[test]
    fn quickcheck_float_operand_promotes() {
        fn prop(a: i32, b: f64) -> TestResult {
            if !b.is_finite() {
                return TestResult::discard();
            }
            let sum = Number::from(a) + Number::Float(b);
            TestResult::from_bool(sum.is_float() && sum == f64::from(a) + b)
        }
        quickcheck(prop as fn(i32, f64) -> TestResult);
    }
}
