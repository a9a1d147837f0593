//! Representation-sensitive equality.
//!
//! The ordinary `PartialEq` on numbers compares exact values, so `1`,
//! `1.0`, `1.00` and `2/2` are all equal. [`StrictEq`] additionally
//! requires the stored representation to match: the same kind, and
//! within a kind the same scale or the same stored fraction. Two
//! numbers that are strictly equal print identically.

use super::Number;
use super::integer::Integer;
use super::decimal::Decimal;
use super::rational::Rational;

/// Equality of stored representation. `a.strict_eq(b)` implies
/// `a == b`.
pub trait StrictEq: PartialEq {
  fn strict_eq(&self, other: &Self) -> bool;
}

impl StrictEq for Integer {
  fn strict_eq(&self, other: &Integer) -> bool {
    self.as_bigint() == other.as_bigint()
  }
}

impl StrictEq for Decimal {
  /// `1.0` and `1.00` are equal but not strictly equal.
  fn strict_eq(&self, other: &Decimal) -> bool {
    self.scale() == other.scale() && self.unscaled_value() == other.unscaled_value()
  }
}

impl StrictEq for Rational {
  /// `1/2` and `2/4` are equal but not strictly equal.
  fn strict_eq(&self, other: &Rational) -> bool {
    self.numerator() == other.numerator() && self.denominator() == other.denominator()
  }
}

impl StrictEq for Number {
  fn strict_eq(&self, other: &Number) -> bool {
    match (self, other) {
      (Number::Integer(a), Number::Integer(b)) => a.strict_eq(b),
      (Number::Decimal(a), Number::Decimal(b)) => a.strict_eq(b),
      (Number::Rational(a), Number::Rational(b)) => a.strict_eq(b),
      _ => false,
    }
  }
}

impl<T: StrictEq> StrictEq for [T] {
  fn strict_eq(&self, other: &Self) -> bool {
    self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.strict_eq(b))
  }
}

impl<T: StrictEq> StrictEq for Vec<T> {
  fn strict_eq(&self, other: &Self) -> bool {
    self.as_slice().strict_eq(other.as_slice())
  }
}

impl<T: StrictEq> StrictEq for Option<T> {
  fn strict_eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Some(a), Some(b)) => a.strict_eq(b),
      (None, None) => true,
      _ => false,
    }
  }
}

#[macro_export]
macro_rules! assert_strict_eq {
  ($left:expr, $right:expr $(,)?) => {
    match (&$left, &$right) {
      (left_val, right_val) => {
        assert!(
          $crate::number::StrictEq::strict_eq(left_val, right_val),
          "assertion `left strict_eq right` failed\n  left: {:?}\n right: {:?}",
          left_val,
          right_val,
        )
      }
    }
  }
}

#[macro_export]
macro_rules! assert_strict_ne {
  ($left:expr, $right:expr $(,)?) => {
    match (&$left, &$right) {
      (left_val, right_val) => {
        assert!(
          !$crate::number::StrictEq::strict_eq(left_val, right_val),
          "assertion `!(left strict_eq right)` failed\n  left: {:?}\n right: {:?}",
          left_val,
          right_val,
        )
      }
    }
  }
}
