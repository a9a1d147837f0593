//! The capability shared by every kind of exact number.
//!
//! Each kind supplies a single three-way comparison against a
//! [`Number`]; equality, ordering, and sign predicates are all
//! provided on top of it and are never implemented separately.

use super::Number;
use super::integer::Integer;
use super::decimal::Decimal;
use super::rational::Rational;
use super::error::NumberError;
use super::kind::NumericKind;
use super::input::NumberInput;

use tracing::{debug, trace};

use std::cmp::Ordering;
use std::fmt::Display;

pub trait ExactNumber: Display {
  fn kind(&self) -> NumericKind;

  /// Narrows to an integer, failing if the value has a fractional
  /// part.
  fn to_integer(&self) -> Result<Integer, NumberError>;

  /// Converts to a decimal, failing if the value has no terminating
  /// decimal expansion.
  fn to_decimal(&self) -> Result<Decimal, NumberError>;

  /// Widens to a fraction. This never loses information.
  fn to_rational(&self) -> Rational;

  /// Three-way comparison by exact value, regardless of kind.
  fn compare_number(&self, other: &Number) -> Ordering;

  /// Converts to the given kind, exactly or not at all.
  fn to_kind(&self, kind: NumericKind) -> Result<Number, NumberError> {
    trace!(from = %self.kind(), to = %kind, "converting number");
    match kind {
      NumericKind::Integer => self.to_integer().map(Number::from),
      NumericKind::Decimal => self.to_decimal().map(Number::from),
      NumericKind::Rational => Ok(Number::from(self.to_rational())),
    }
  }

  /// Compares against anything the number factory accepts. The
  /// right-hand side is constructed with [`Number::of`] first, which
  /// is where any error comes from.
  fn compare<'a>(&self, other: impl Into<NumberInput<'a>>) -> Result<Ordering, NumberError> {
    let other = Number::of(other)?;
    Ok(self.compare_number(&other))
  }

  fn is_equal_to<'a>(&self, other: impl Into<NumberInput<'a>>) -> Result<bool, NumberError> {
    Ok(self.compare(other)? == Ordering::Equal)
  }

  fn is_less_than<'a>(&self, other: impl Into<NumberInput<'a>>) -> Result<bool, NumberError> {
    Ok(self.compare(other)? == Ordering::Less)
  }

  fn is_less_than_or_equal_to<'a>(&self, other: impl Into<NumberInput<'a>>) -> Result<bool, NumberError> {
    Ok(self.compare(other)? != Ordering::Greater)
  }

  fn is_greater_than<'a>(&self, other: impl Into<NumberInput<'a>>) -> Result<bool, NumberError> {
    Ok(self.compare(other)? == Ordering::Greater)
  }

  fn is_greater_than_or_equal_to<'a>(&self, other: impl Into<NumberInput<'a>>) -> Result<bool, NumberError> {
    Ok(self.compare(other)? != Ordering::Less)
  }

  /// The sign of the value, as its comparison against zero.
  fn sign(&self) -> Ordering {
    self.compare_number(&Number::zero())
  }

  fn is_zero(&self) -> bool {
    self.sign() == Ordering::Equal
  }

  fn is_negative(&self) -> bool {
    self.sign() == Ordering::Less
  }

  fn is_negative_or_zero(&self) -> bool {
    self.sign() != Ordering::Greater
  }

  fn is_positive(&self) -> bool {
    self.sign() == Ordering::Greater
  }

  fn is_positive_or_zero(&self) -> bool {
    self.sign() != Ordering::Less
  }
}

/// Builds the error for a conversion that would need rounding.
pub(crate) fn refuse_conversion<N: ExactNumber + ?Sized>(value: &N, to: NumericKind) -> NumberError {
  debug!(value = %value, from = %value.kind(), to = %to, "conversion requires rounding");
  NumberError::rounding_necessary(value, value.kind(), to)
}

/// Implements `PartialEq`, `Eq`, `PartialOrd`, and `Ord` by exact
/// value through [`ExactNumber::compare_number`]. Values of different
/// kinds or scales can be equal.
macro_rules! impl_value_ordering {
  ($($t:ty),* $(,)?) => {
    $(
      impl PartialEq for $t {
        fn eq(&self, other: &$t) -> bool {
          self.cmp(other) == Ordering::Equal
        }
      }

      impl Eq for $t {}

      impl PartialOrd for $t {
        fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
          Some(self.cmp(other))
        }
      }

      impl Ord for $t {
        fn cmp(&self, other: &$t) -> Ordering {
          super::promote::compare(self.into(), other.into())
        }
      }
    )*
  }
}

impl_value_ordering!(Integer, Decimal, Rational, Number);
