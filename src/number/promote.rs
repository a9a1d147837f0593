//! Private module used to promote two numbers of possibly different
//! kinds to a common kind, so that they can be compared by exact
//! value. None of this functionality is directly exposed outside of
//! `crate::number`.

use super::Number;
use super::integer::Integer;
use super::decimal::{Decimal, pow10};
use super::rational::Rational;

use num::{BigInt, One};

use std::borrow::Cow;
use std::cmp::Ordering;

/// A borrowed view of any kind of number.
#[derive(Debug, Clone, Copy)]
pub enum NumberRef<'a> {
  Integer(&'a Integer),
  Decimal(&'a Decimal),
  Rational(&'a Rational),
}

/// Two numbers brought to a common kind. Decimals are additionally
/// brought to a common scale, so only their unscaled values remain.
/// Fractions are kept as `(numerator, denominator)` pairs with
/// positive denominators.
#[derive(Debug, Clone)]
enum NumberPair<'a> {
  Integers(&'a BigInt, &'a BigInt),
  Decimals(Cow<'a, BigInt>, Cow<'a, BigInt>),
  Rationals(Fraction<'a>, Fraction<'a>),
}

type Fraction<'a> = (Cow<'a, BigInt>, Cow<'a, BigInt>);

impl<'a> NumberPair<'a> {
  /// Promote two numbers to the smallest kind that holds both.
  fn promote(left: NumberRef<'a>, right: NumberRef<'a>) -> NumberPair<'a> {
    match (left, right) {
      (NumberRef::Integer(left), NumberRef::Integer(right)) => NumberPair::Integers(left.as_bigint(), right.as_bigint()),
      (NumberRef::Integer(left), NumberRef::Decimal(right)) => decimals((left.as_bigint(), 0), decimal_parts(right)),
      (NumberRef::Decimal(left), NumberRef::Integer(right)) => decimals(decimal_parts(left), (right.as_bigint(), 0)),
      (NumberRef::Decimal(left), NumberRef::Decimal(right)) => decimals(decimal_parts(left), decimal_parts(right)),
      (left, right) => NumberPair::Rationals(as_fraction(left), as_fraction(right)),
    }
  }

  fn cmp(&self) -> Ordering {
    match self {
      NumberPair::Integers(left, right) => left.cmp(right),
      NumberPair::Decimals(left, right) => left.cmp(right),
      NumberPair::Rationals((ln, ld), (rn, rd)) => {
        // Both denominators are positive, so cross-multiplying
        // preserves the ordering.
        (&**ln * &**rd).cmp(&(&**rn * &**ld))
      }
    }
  }
}

/// An unscaled value together with its scale.
fn decimal_parts(d: &Decimal) -> (&BigInt, u32) {
  (d.unscaled_value(), d.scale())
}

fn decimals<'a>(left: (&'a BigInt, u32), right: (&'a BigInt, u32)) -> NumberPair<'a> {
  let scale = left.1.max(right.1);
  NumberPair::Decimals(rescale(left, scale), rescale(right, scale))
}

fn rescale(decimal: (&BigInt, u32), scale: u32) -> Cow<'_, BigInt> {
  let (unscaled, current) = decimal;
  if current == scale {
    Cow::Borrowed(unscaled)
  } else {
    Cow::Owned(unscaled * pow10(scale - current))
  }
}

fn as_fraction(number: NumberRef<'_>) -> Fraction<'_> {
  match number {
    NumberRef::Integer(i) => (Cow::Borrowed(i.as_bigint()), Cow::Owned(BigInt::one())),
    NumberRef::Decimal(d) => (Cow::Borrowed(d.unscaled_value()), Cow::Owned(pow10(d.scale()))),
    NumberRef::Rational(r) => (Cow::Borrowed(r.numerator()), Cow::Borrowed(r.denominator())),
  }
}

/// Compares two numbers of any kinds by exact value.
pub fn compare(left: NumberRef<'_>, right: NumberRef<'_>) -> Ordering {
  NumberPair::promote(left, right).cmp()
}

impl<'a> From<&'a Integer> for NumberRef<'a> {
  fn from(i: &'a Integer) -> Self {
    NumberRef::Integer(i)
  }
}

impl<'a> From<&'a Decimal> for NumberRef<'a> {
  fn from(d: &'a Decimal) -> Self {
    NumberRef::Decimal(d)
  }
}

impl<'a> From<&'a Rational> for NumberRef<'a> {
  fn from(r: &'a Rational) -> Self {
    NumberRef::Rational(r)
  }
}

impl<'a> From<&'a Number> for NumberRef<'a> {
  fn from(n: &'a Number) -> Self {
    n.as_number_ref()
  }
}
