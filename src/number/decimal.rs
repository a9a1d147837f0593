use super::{Number, NumberRef};
use super::integer::Integer;
use super::rational::Rational;
use super::error::NumberError;
use super::kind::NumericKind;
use super::traits::{ExactNumber, refuse_conversion};
use super::input::NumberInput;
use super::promote;

use num::{BigInt, Zero, Signed};
use num::integer::Integer as _;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::cmp::Ordering;

/// An arbitrary-precision decimal number, represented as an integer
/// unscaled value together with a non-negative power-of-ten scale.
/// The value represented is `unscaled * 10^(-scale)`.
///
/// Decimals with different scales can be equal in value: `1.0` and
/// `1.00` compare equal but print differently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal {
  unscaled: BigInt,
  scale: u32,
}

/// The largest scale a decimal may have. Exponents and scales beyond
/// this fail with [`NumberError::ScaleOverflow`], which keeps every
/// power of ten this crate computes below a million digits.
pub const MAX_SCALE: u32 = 1 << 20;

/// Returns `10^exp`.
///
/// Precondition: `exp <= MAX_SCALE`.
pub(crate) fn pow10(exp: u32) -> BigInt {
  debug_assert!(exp <= MAX_SCALE);
  BigInt::from(10u32).pow(exp)
}

/// Checks `scale` against [`MAX_SCALE`]. `literal` names the value in
/// the error.
pub(crate) fn check_scale(scale: u32, literal: impl FnOnce() -> String) -> Result<u32, NumberError> {
  if scale > MAX_SCALE {
    Err(NumberError::scale_overflow(literal()))
  } else {
    Ok(scale)
  }
}

impl Decimal {
  /// Constructs a decimal directly from its fields, without any
  /// parsing. Fails with [`NumberError::ScaleOverflow`] if `scale`
  /// exceeds [`MAX_SCALE`].
  pub fn new(unscaled: impl Into<BigInt>, scale: u32) -> Result<Decimal, NumberError> {
    let unscaled = unscaled.into();
    let scale = check_scale(scale, || format!("{unscaled}e-{scale}"))?;
    Ok(Decimal { unscaled, scale })
  }

  /// Constructs a decimal whose scale is already known to be in
  /// range.
  pub(crate) fn from_parts(unscaled: impl Into<BigInt>, scale: u32) -> Decimal {
    debug_assert!(scale <= MAX_SCALE);
    Decimal { unscaled: unscaled.into(), scale }
  }

  /// Parses or converts `value` and narrows the result to a decimal.
  /// Fails with [`NumberError::RoundingNecessary`] for fractions with
  /// no terminating decimal expansion.
  pub fn of<'a>(value: impl Into<NumberInput<'a>>) -> Result<Decimal, NumberError> {
    Number::of(value)?.to_decimal()
  }

  pub fn unscaled_value(&self) -> &BigInt {
    &self.unscaled
  }

  pub fn scale(&self) -> u32 {
    self.scale
  }

  /// Returns an equal decimal with the smallest possible scale.
  pub fn strip_trailing_zeros(&self) -> Decimal {
    let ten = BigInt::from(10);
    let mut unscaled = self.unscaled.clone();
    let mut scale = self.scale;
    if unscaled.is_zero() {
      return Decimal::from_parts(unscaled, 0);
    }
    while scale > 0 {
      let (quotient, remainder) = unscaled.div_rem(&ten);
      if !remainder.is_zero() {
        break;
      }
      unscaled = quotient;
      scale -= 1;
    }
    Decimal::from_parts(unscaled, scale)
  }
}

impl ExactNumber for Decimal {
  fn kind(&self) -> NumericKind {
    NumericKind::Decimal
  }

  fn to_integer(&self) -> Result<Integer, NumberError> {
    if self.scale == 0 {
      return Ok(Integer::from(self.unscaled.clone()));
    }
    let (quotient, remainder) = self.unscaled.div_rem(&pow10(self.scale));
    if remainder.is_zero() {
      Ok(Integer::from(quotient))
    } else {
      Err(refuse_conversion(self, NumericKind::Integer))
    }
  }

  fn to_decimal(&self) -> Result<Decimal, NumberError> {
    Ok(self.clone())
  }

  fn to_rational(&self) -> Rational {
    Rational::new_trusted(self.unscaled.clone(), pow10(self.scale))
  }

  fn compare_number(&self, other: &Number) -> Ordering {
    promote::compare(NumberRef::Decimal(self), other.as_number_ref())
  }
}

impl From<Integer> for Decimal {
  fn from(i: Integer) -> Decimal {
    Decimal::from_parts(i.into_bigint(), 0)
  }
}

impl From<Decimal> for String {
  fn from(d: Decimal) -> String {
    d.to_string()
  }
}

impl TryFrom<String> for Decimal {
  type Error = NumberError;

  fn try_from(s: String) -> Result<Decimal, NumberError> {
    Decimal::of(s)
  }
}

impl FromStr for Decimal {
  type Err = NumberError;

  fn from_str(s: &str) -> Result<Decimal, NumberError> {
    Decimal::of(s)
  }
}

impl Display for Decimal {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let digits = self.unscaled.abs().to_string();
    let scale = self.scale as usize;
    if self.unscaled.is_negative() {
      write!(f, "-")?;
    }
    if scale == 0 {
      return write!(f, "{digits}");
    }
    // Left-pad so that there is at least one digit before the point.
    let digits = if digits.len() <= scale {
      format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
    } else {
      digits
    };
    let (integral, fractional) = digits.split_at(digits.len() - scale);
    write!(f, "{integral}.{fractional}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_checks_scale() {
    let d = Decimal::new(-314, 2).unwrap();
    assert_eq!(d.to_string(), "-3.14");
    assert_eq!(Decimal::new(1, MAX_SCALE).unwrap().scale(), MAX_SCALE);
    assert_eq!(
      Decimal::new(1, MAX_SCALE + 1),
      Err(NumberError::scale_overflow(format!("1e-{}", MAX_SCALE + 1))),
    );
    assert_eq!(
      Decimal::new(7, u32::MAX),
      Err(NumberError::scale_overflow(format!("7e-{}", u32::MAX))),
    );
  }

  #[test]
  fn test_display() {
    assert_eq!(Decimal::from_parts(123, 0).to_string(), "123");
    assert_eq!(Decimal::from_parts(1230, 1).to_string(), "123.0");
    assert_eq!(Decimal::from_parts(-5, 2).to_string(), "-0.05");
    assert_eq!(Decimal::from_parts(5, 1).to_string(), "0.5");
    assert_eq!(Decimal::from_parts(0, 3).to_string(), "0.000");
    assert_eq!(Decimal::from_parts(-123456, 3).to_string(), "-123.456");
  }

  #[test]
  fn test_of_literal_scale() {
    let d = Decimal::of("1.230e2").unwrap();
    assert_eq!(d.unscaled_value(), &BigInt::from(1230));
    assert_eq!(d.scale(), 1);

    let d = Decimal::of("1.5e5").unwrap();
    assert_eq!(d.unscaled_value(), &BigInt::from(150000));
    assert_eq!(d.scale(), 0);

    let d = Decimal::of("-25e-3").unwrap();
    assert_eq!(d.unscaled_value(), &BigInt::from(-25));
    assert_eq!(d.scale(), 3);
  }

  #[test]
  fn test_of_rational() {
    let d = Decimal::of("3/8").unwrap();
    assert_eq!(d.to_string(), "0.375");
    let d = Decimal::of("-6/15").unwrap();
    assert_eq!(d.to_string(), "-0.4");
    let d = Decimal::of("10/5").unwrap();
    assert_eq!(d.to_string(), "2");
    assert_eq!(
      Decimal::of("1/3"),
      Err(NumberError::rounding_necessary("1/3", NumericKind::Rational, NumericKind::Decimal)),
    );
  }

  #[test]
  fn test_to_integer() {
    assert_eq!(Decimal::from_parts(1200, 2).to_integer().unwrap(), Integer::from(12));
    assert_eq!(Decimal::from_parts(-7, 0).to_integer().unwrap(), Integer::from(-7));
    assert_eq!(Decimal::from_parts(0, 3).to_integer().unwrap(), Integer::from(0));
    assert_eq!(
      Decimal::from_parts(1201, 2).to_integer(),
      Err(NumberError::rounding_necessary("12.01", NumericKind::Decimal, NumericKind::Integer)),
    );
  }

  #[test]
  fn test_to_rational_is_unreduced() {
    let r = Decimal::from_parts(250, 2).to_rational();
    assert_eq!(r.numerator(), &BigInt::from(250));
    assert_eq!(r.denominator(), &BigInt::from(100));
    assert_eq!(r.simplified().to_string(), "5/2");
  }

  #[test]
  fn test_strip_trailing_zeros() {
    assert_eq!(Decimal::from_parts(12300, 3).strip_trailing_zeros().to_string(), "12.3");
    assert_eq!(Decimal::from_parts(12300, 0).strip_trailing_zeros().to_string(), "12300");
    assert_eq!(Decimal::from_parts(0, 5).strip_trailing_zeros().to_string(), "0");
    assert_eq!(Decimal::from_parts(-100, 2).strip_trailing_zeros().to_string(), "-1");
  }

  #[test]
  fn test_equal_across_scales() {
    assert_eq!(Decimal::from_parts(10, 1), Decimal::from_parts(100, 2));
    assert_eq!(Decimal::from_parts(10, 1), Decimal::from_parts(1, 0));
    assert!(Decimal::from_parts(-1, 1) < Decimal::from_parts(0, 5));
  }
}
