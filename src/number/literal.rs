//! Classification of number literals.
//!
//! Every literal string is matched, in full, against a single
//! grammar:
//!
//! ```text
//! integral   := sign? digit+
//! fractional := integral ('.' digit+)? (('e'|'E') sign? digit+)?
//! rational   := integral ('/' digit+)?
//! literal    := fractional | rational
//! ```
//!
//! A literal with a denominator is rational; a literal with a
//! fractional part or an exponent is decimal; anything else is an
//! integer.

use super::kind::NumericKind;
use super::error::NumberError;
use crate::util::sign::Sign;

use once_cell::sync::Lazy;
use regex::Regex;

use std::fmt::{self, Display, Formatter};

static LITERAL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"^(?P<sign>[-+])?(?P<integral>[0-9]+)(?:(?:\.(?P<fractional>[0-9]+))?(?:[eE](?P<exponent>[-+]?[0-9]+))?|/(?P<denominator>[0-9]+))$"
  ).unwrap()
});

/// A classified number literal, borrowing its digit groups from the
/// input string. Digit fields only ever contain ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberLiteral<'a> {
  Integer {
    sign: Option<Sign>,
    digits: &'a str,
  },
  Decimal {
    sign: Option<Sign>,
    integral: &'a str,
    fractional: &'a str,
    /// The exponent digits, including an optional sign.
    exponent: Option<&'a str>,
  },
  Rational {
    sign: Option<Sign>,
    numerator: &'a str,
    denominator: &'a str,
  },
}

impl<'a> NumberLiteral<'a> {
  /// Classifies `text` against the literal grammar. The whole string
  /// must match; no surrounding characters are tolerated.
  pub fn classify(text: &'a str) -> Result<Self, NumberError> {
    let caps = LITERAL_RE.captures(text).ok_or_else(|| NumberError::format(text))?;
    let sign = caps.name("sign").and_then(|m| m.as_str().chars().next()).and_then(Sign::from_char);
    // The integral group is not optional in the grammar, so it is
    // present on every successful match.
    let integral = caps.name("integral").map_or("", |m| m.as_str());
    let fractional = caps.name("fractional").map(|m| m.as_str());
    let exponent = caps.name("exponent").map(|m| m.as_str());
    let denominator = caps.name("denominator").map(|m| m.as_str());

    let literal = if let Some(denominator) = denominator {
      NumberLiteral::Rational { sign, numerator: integral, denominator }
    } else if fractional.is_some() || exponent.is_some() {
      NumberLiteral::Decimal { sign, integral, fractional: fractional.unwrap_or(""), exponent }
    } else {
      NumberLiteral::Integer { sign, digits: integral }
    };
    Ok(literal)
  }

  /// The kind of number this literal naturally denotes.
  pub fn kind(&self) -> NumericKind {
    match self {
      NumberLiteral::Integer { .. } => NumericKind::Integer,
      NumberLiteral::Decimal { .. } => NumericKind::Decimal,
      NumberLiteral::Rational { .. } => NumericKind::Rational,
    }
  }

  pub fn sign(&self) -> Option<Sign> {
    match self {
      NumberLiteral::Integer { sign, .. } => *sign,
      NumberLiteral::Decimal { sign, .. } => *sign,
      NumberLiteral::Rational { sign, .. } => *sign,
    }
  }
}

/// Reproduces the literal text as it was classified, up to the case
/// of the exponent marker.
impl Display for NumberLiteral<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if let Some(sign) = self.sign() {
      write!(f, "{sign}")?;
    }
    match self {
      NumberLiteral::Integer { digits, .. } => {
        write!(f, "{digits}")
      }
      NumberLiteral::Decimal { integral, fractional, exponent, .. } => {
        write!(f, "{integral}")?;
        if !fractional.is_empty() {
          write!(f, ".{fractional}")?;
        }
        if let Some(exponent) = exponent {
          write!(f, "e{exponent}")?;
        }
        Ok(())
      }
      NumberLiteral::Rational { numerator, denominator, .. } => {
        write!(f, "{numerator}/{denominator}")
      }
    }
  }
}
