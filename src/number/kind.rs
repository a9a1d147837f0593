use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// The three kinds of exact number. These are ordered by generality,
/// so if `a <= b`, then every value of kind `a` can be converted to
/// kind `b` without loss. For instance, `Integer <= Decimal` means
/// that every integer is also a decimal with scale zero.
///
/// The converse direction is not total: narrowing a value to a
/// smaller kind succeeds only when no rounding would be required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
  /// An arbitrary-precision integer.
  Integer,
  /// An arbitrary-precision integer scaled by a power of ten.
  Decimal,
  /// A fraction of two arbitrary-precision integers.
  Rational,
}

impl NumericKind {
  pub const ALL: [NumericKind; 3] = [NumericKind::Integer, NumericKind::Decimal, NumericKind::Rational];

  /// Returns true if every value of this kind can be exactly
  /// represented as a value of `other`.
  pub fn widens_to(self, other: NumericKind) -> bool {
    self <= other
  }

  pub fn name(self) -> &'static str {
    match self {
      NumericKind::Integer => "integer",
      NumericKind::Decimal => "decimal",
      NumericKind::Rational => "rational",
    }
  }
}

impl Display for NumericKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_widening() {
    assert!(NumericKind::Integer.widens_to(NumericKind::Integer));
    assert!(NumericKind::Integer.widens_to(NumericKind::Decimal));
    assert!(NumericKind::Integer.widens_to(NumericKind::Rational));
    assert!(NumericKind::Decimal.widens_to(NumericKind::Rational));
    assert!(!NumericKind::Rational.widens_to(NumericKind::Decimal));
    assert!(!NumericKind::Decimal.widens_to(NumericKind::Integer));
  }

  #[test]
  fn test_display() {
    assert_eq!(NumericKind::Integer.to_string(), "integer");
    assert_eq!(NumericKind::Decimal.to_string(), "decimal");
    assert_eq!(NumericKind::Rational.to_string(), "rational");
  }
}
