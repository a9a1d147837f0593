use super::{Number, NumberRef};
use super::integer::Integer;
use super::decimal::{Decimal, MAX_SCALE, pow10, check_scale};
use super::error::NumberError;
use super::kind::NumericKind;
use super::traits::{ExactNumber, refuse_conversion};
use super::input::NumberInput;
use super::promote;

use num::{BigInt, Zero, One, Signed};
use num::integer::Integer as _;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::cmp::Ordering;

/// An exact fraction of two arbitrary-precision integers.
///
/// The denominator is always positive. The fraction is not
/// necessarily in lowest terms: values produced by the factory and by
/// kind conversion keep the fields they were built from, and
/// reduction happens only through [`Rational::new`] or
/// [`Rational::simplified`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rational {
  numerator: BigInt,
  denominator: BigInt,
}

impl Rational {
  /// Constructs a fraction in lowest terms, moving any sign onto the
  /// numerator. Fails if `denominator` is zero.
  pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Rational, NumberError> {
    let numerator = numerator.into();
    let denominator = denominator.into();
    if denominator.is_zero() {
      return Err(NumberError::division_by_zero(format!("{numerator}/{denominator}")));
    }
    let rational = if denominator.is_negative() {
      Rational::new_trusted(-numerator, -denominator)
    } else {
      Rational::new_trusted(numerator, denominator)
    };
    Ok(rational.simplified())
  }

  /// Constructs a fraction from its fields without reducing it.
  ///
  /// Precondition: `denominator > 0`.
  pub(crate) fn new_trusted(numerator: BigInt, denominator: BigInt) -> Rational {
    debug_assert!(denominator.is_positive());
    Rational { numerator, denominator }
  }

  /// Parses or converts `value` and widens the result to a fraction.
  pub fn of<'a>(value: impl Into<NumberInput<'a>>) -> Result<Rational, NumberError> {
    Ok(Number::of(value)?.to_rational())
  }

  pub fn numerator(&self) -> &BigInt {
    &self.numerator
  }

  pub fn denominator(&self) -> &BigInt {
    &self.denominator
  }

  /// Returns the equal fraction in lowest terms.
  pub fn simplified(&self) -> Rational {
    let gcd = self.numerator.gcd(&self.denominator);
    if gcd.is_one() {
      return self.clone();
    }
    Rational::new_trusted(&self.numerator / &gcd, &self.denominator / &gcd)
  }

  pub fn is_reduced(&self) -> bool {
    self.numerator.gcd(&self.denominator).is_one()
  }
}

/// Splits every factor of two out of `value`, returning how many
/// there were (saturating at `u32::MAX`).
fn remove_twos(value: &mut BigInt) -> u32 {
  let twos = value.trailing_zeros().unwrap_or(0);
  *value >>= twos;
  u32::try_from(twos).unwrap_or(u32::MAX)
}

/// Splits factors of `prime` out of `value`, returning how many there
/// were. Stops early once the count passes `MAX_SCALE`.
fn remove_factors(value: &mut BigInt, prime: u32) -> u32 {
  let prime = BigInt::from(prime);
  let mut count = 0;
  while count <= MAX_SCALE {
    let (quotient, remainder) = value.div_rem(&prime);
    if !remainder.is_zero() {
      break;
    }
    *value = quotient;
    count += 1;
  }
  count
}

impl ExactNumber for Rational {
  fn kind(&self) -> NumericKind {
    NumericKind::Rational
  }

  fn to_integer(&self) -> Result<Integer, NumberError> {
    let (quotient, remainder) = self.numerator.div_rem(&self.denominator);
    if remainder.is_zero() {
      Ok(Integer::from(quotient))
    } else {
      Err(refuse_conversion(self, NumericKind::Integer))
    }
  }

  /// Succeeds exactly when the reduced denominator has no prime
  /// factors other than 2 and 5. The result has the smallest scale
  /// that represents the fraction, which must not exceed
  /// [`MAX_SCALE`].
  fn to_decimal(&self) -> Result<Decimal, NumberError> {
    let reduced = self.simplified();
    let mut rest = reduced.denominator.clone();
    let twos = remove_twos(&mut rest);
    let fives = remove_factors(&mut rest, 5);
    // Past the bound on fives, `rest` may still hold more of them.
    if fives <= MAX_SCALE && !rest.is_one() {
      return Err(refuse_conversion(self, NumericKind::Decimal));
    }
    let scale = check_scale(twos.max(fives), || self.to_string())?;
    let unscaled = reduced.numerator * pow10(scale) / reduced.denominator;
    Ok(Decimal::from_parts(unscaled, scale))
  }

  fn to_rational(&self) -> Rational {
    self.clone()
  }

  fn compare_number(&self, other: &Number) -> Ordering {
    promote::compare(NumberRef::Rational(self), other.as_number_ref())
  }
}

impl From<Integer> for Rational {
  fn from(i: Integer) -> Rational {
    Rational::new_trusted(i.into_bigint(), BigInt::one())
  }
}

impl From<Rational> for String {
  fn from(r: Rational) -> String {
    r.to_string()
  }
}

impl TryFrom<String> for Rational {
  type Error = NumberError;

  fn try_from(s: String) -> Result<Rational, NumberError> {
    Rational::of(s)
  }
}

impl FromStr for Rational {
  type Err = NumberError;

  fn from_str(s: &str) -> Result<Rational, NumberError> {
    Rational::of(s)
  }
}

impl Display for Rational {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.numerator, self.denominator)
  }
}
