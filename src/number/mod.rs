//! Exact numbers of three kinds, and the factory that builds them.
//!
//! Every number is an [`Integer`], a [`Decimal`], or a [`Rational`].
//! The polymorphic [`Number`] holds any one of them. Numbers are
//! built from literals (or native integers, floats, and other
//! numbers) by [`Number::of`], which constructs the kind the literal
//! naturally denotes. A specific kind can be requested, in which case
//! the natural value is converted afterwards; conversions are always
//! exact and fail with [`NumberError::RoundingNecessary`] otherwise.
//!
//! All kinds share one exact-value ordering, so `"1"`, `"1.0"`, and
//! `"2/2"` all compare equal.

mod canonical;
mod decimal;
mod error;
mod factory;
mod input;
mod integer;
mod kind;
mod literal;
mod promote;
mod rational;
mod strict;
mod traits;

pub use canonical::{canonicalize, strip_leading_zeros};
pub use decimal::{Decimal, MAX_SCALE};
pub use error::NumberError;
pub use factory::{FactoryMode, NumberFactory, construct};
pub use input::NumberInput;
pub use integer::Integer;
pub use kind::NumericKind;
pub use literal::NumberLiteral;
pub use rational::Rational;
pub use strict::StrictEq;
pub use traits::ExactNumber;

use promote::NumberRef;

use itertools::process_results;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::cmp::Ordering;

/// A number of any of the three kinds. The kind of a value never
/// changes; converting produces a new value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Number {
  Integer(Integer),
  Decimal(Decimal),
  Rational(Rational),
}

impl Number {
  /// Constructs the natural kind of number for `value`, using the
  /// default [`NumberFactory`].
  pub fn of<'a>(value: impl Into<NumberInput<'a>>) -> Result<Number, NumberError> {
    NumberFactory::default().of(value, None)
  }

  /// Constructs a number of the requested kind, using the default
  /// [`NumberFactory`].
  pub fn of_kind<'a>(value: impl Into<NumberInput<'a>>, kind: NumericKind) -> Result<Number, NumberError> {
    NumberFactory::default().of(value, Some(kind))
  }

  pub fn zero() -> Number {
    Number::Integer(Integer::default())
  }

  /// Converts to the given kind. A number that already has that kind
  /// is returned unchanged.
  pub fn convert(self, kind: NumericKind) -> Result<Number, NumberError> {
    if self.kind() == kind {
      Ok(self)
    } else {
      self.to_kind(kind)
    }
  }

  /// The smallest of `values`, each of which is constructed with
  /// [`Number::of`]. Of several equal values, the first one wins.
  /// Fails with [`NumberError::InvalidArgument`] if `values` is
  /// empty.
  pub fn min<'a, I>(values: I) -> Result<Number, NumberError>
  where I: IntoIterator,
        I::Item: Into<NumberInput<'a>> {
    extreme(values, Ordering::Less)
  }

  /// The largest of `values`. See [`Number::min`].
  pub fn max<'a, I>(values: I) -> Result<Number, NumberError>
  where I: IntoIterator,
        I::Item: Into<NumberInput<'a>> {
    extreme(values, Ordering::Greater)
  }

  fn as_number_ref(&self) -> NumberRef<'_> {
    match self {
      Number::Integer(i) => NumberRef::Integer(i),
      Number::Decimal(d) => NumberRef::Decimal(d),
      Number::Rational(r) => NumberRef::Rational(r),
    }
  }
}

/// Linear scan keeping whichever value compares as `keep` against
/// the current best.
fn extreme<'a, I>(values: I, keep: Ordering) -> Result<Number, NumberError>
where I: IntoIterator,
      I::Item: Into<NumberInput<'a>> {
  let best = process_results(values.into_iter().map(Number::of), |numbers| {
    numbers.reduce(|best, candidate| {
      if candidate.compare_number(&best) == keep { candidate } else { best }
    })
  })?;
  best.ok_or_else(|| NumberError::invalid_argument("min and max require at least one value"))
}

impl ExactNumber for Number {
  fn kind(&self) -> NumericKind {
    match self {
      Number::Integer(i) => i.kind(),
      Number::Decimal(d) => d.kind(),
      Number::Rational(r) => r.kind(),
    }
  }

  fn to_integer(&self) -> Result<Integer, NumberError> {
    match self {
      Number::Integer(i) => i.to_integer(),
      Number::Decimal(d) => d.to_integer(),
      Number::Rational(r) => r.to_integer(),
    }
  }

  fn to_decimal(&self) -> Result<Decimal, NumberError> {
    match self {
      Number::Integer(i) => i.to_decimal(),
      Number::Decimal(d) => d.to_decimal(),
      Number::Rational(r) => r.to_decimal(),
    }
  }

  fn to_rational(&self) -> Rational {
    match self {
      Number::Integer(i) => i.to_rational(),
      Number::Decimal(d) => d.to_rational(),
      Number::Rational(r) => r.to_rational(),
    }
  }

  fn compare_number(&self, other: &Number) -> Ordering {
    promote::compare(self.as_number_ref(), other.as_number_ref())
  }
}

impl Default for Number {
  fn default() -> Number {
    Number::zero()
  }
}

impl From<Integer> for Number {
  fn from(i: Integer) -> Number {
    Number::Integer(i)
  }
}

impl From<Decimal> for Number {
  fn from(d: Decimal) -> Number {
    Number::Decimal(d)
  }
}

impl From<Rational> for Number {
  fn from(r: Rational) -> Number {
    Number::Rational(r)
  }
}

/// Constructs an integer number from an `i64`.
impl From<i64> for Number {
  fn from(i: i64) -> Number {
    Number::Integer(Integer::from(i))
  }
}

impl From<Number> for String {
  fn from(n: Number) -> String {
    n.to_string()
  }
}

impl TryFrom<String> for Number {
  type Error = NumberError;

  fn try_from(s: String) -> Result<Number, NumberError> {
    Number::of(s)
  }
}

impl FromStr for Number {
  type Err = NumberError;

  fn from_str(s: &str) -> Result<Number, NumberError> {
    Number::of(s)
  }
}

impl Display for Number {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Number::Integer(i) => i.fmt(f),
      Number::Decimal(d) => d.fmt(f),
      Number::Rational(r) => r.fmt(f),
    }
  }
}
