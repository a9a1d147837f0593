//! Signs as they appear in front of number literals.

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
  Negative,
  Positive,
}

impl Sign {
  /// Reads an explicit sign character. Anything other than `'+'` or
  /// `'-'` produces `None`.
  pub fn from_char(c: char) -> Option<Sign> {
    match c {
      '-' => Some(Sign::Negative),
      '+' => Some(Sign::Positive),
      _ => None,
    }
  }

  /// Splits an optional leading sign off of `text`.
  pub fn split(text: &str) -> (Option<Sign>, &str) {
    let mut chars = text.chars();
    match chars.next().and_then(Sign::from_char) {
      Some(sign) => (Some(sign), chars.as_str()),
      None => (None, text),
    }
  }

  pub fn is_negative(self) -> bool {
    self == Sign::Negative
  }
}

impl Display for Sign {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Negative => write!(f, "-"),
      Self::Positive => write!(f, "+"),
    }
  }
}
