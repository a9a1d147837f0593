use super::{Number, NumberRef};
use super::decimal::Decimal;
use super::rational::Rational;
use super::error::NumberError;
use super::kind::NumericKind;
use super::traits::ExactNumber;
use super::input::NumberInput;
use super::promote;

use num::{BigInt, ToPrimitive};
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::cmp::Ordering;

/// An arbitrary-precision integer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Integer {
  value: BigInt,
}

impl Integer {
  /// Parses or converts `value` and narrows the result to an integer.
  /// Fails with [`NumberError::RoundingNecessary`] if the value has a
  /// fractional part.
  pub fn of<'a>(value: impl Into<NumberInput<'a>>) -> Result<Integer, NumberError> {
    Number::of(value)?.to_integer()
  }

  pub fn as_bigint(&self) -> &BigInt {
    &self.value
  }

  pub fn into_bigint(self) -> BigInt {
    self.value
  }

  /// Narrows to a machine integer, or `None` if the value does not
  /// fit.
  pub fn to_i64(&self) -> Option<i64> {
    self.value.to_i64()
  }
}

impl ExactNumber for Integer {
  fn kind(&self) -> NumericKind {
    NumericKind::Integer
  }

  fn to_integer(&self) -> Result<Integer, NumberError> {
    Ok(self.clone())
  }

  fn to_decimal(&self) -> Result<Decimal, NumberError> {
    Ok(Decimal::from_parts(self.value.clone(), 0))
  }

  fn to_rational(&self) -> Rational {
    Rational::new_trusted(self.value.clone(), BigInt::from(1))
  }

  fn compare_number(&self, other: &Number) -> Ordering {
    promote::compare(NumberRef::Integer(self), other.as_number_ref())
  }
}

impl From<BigInt> for Integer {
  fn from(value: BigInt) -> Integer {
    Integer { value }
  }
}

macro_rules! integer_from_native {
  ($($t:ty),* $(,)?) => {
    $(
      impl From<$t> for Integer {
        fn from(value: $t) -> Integer {
          Integer { value: BigInt::from(value) }
        }
      }
    )*
  }
}

integer_from_native!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<Integer> for BigInt {
  fn from(i: Integer) -> BigInt {
    i.value
  }
}

impl From<Integer> for String {
  fn from(i: Integer) -> String {
    i.to_string()
  }
}

impl TryFrom<String> for Integer {
  type Error = NumberError;

  fn try_from(s: String) -> Result<Integer, NumberError> {
    Integer::of(s)
  }
}

impl FromStr for Integer {
  type Err = NumberError;

  fn from_str(s: &str) -> Result<Integer, NumberError> {
    Integer::of(s)
  }
}

impl Display for Integer {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.value.fmt(f)
  }
}
