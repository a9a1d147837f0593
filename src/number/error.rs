use super::kind::NumericKind;

use thiserror::Error;

/// Every way the number factory, the kind converter, or the
/// comparison helpers can fail. Errors carry the offending text so
/// that callers can build a precise diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NumberError {
  #[error("The given value \"{literal}\" does not represent a valid number")]
  Format {
    literal: String,
  },
  #[error("The denominator of \"{literal}\" must not be zero")]
  DivisionByZero {
    literal: String,
  },
  #[error("Rounding is necessary to represent {value} as {to} (was {from})")]
  RoundingNecessary {
    value: String,
    from: NumericKind,
    to: NumericKind,
  },
  #[error("The exponent of \"{literal}\" is out of range")]
  ScaleOverflow {
    literal: String,
  },
  #[error("Invalid argument: {message}")]
  InvalidArgument {
    message: &'static str,
  },
}

impl NumberError {
  pub fn format(literal: impl Into<String>) -> Self {
    NumberError::Format { literal: literal.into() }
  }

  pub fn division_by_zero(literal: impl Into<String>) -> Self {
    NumberError::DivisionByZero { literal: literal.into() }
  }

  pub fn rounding_necessary(value: impl ToString, from: NumericKind, to: NumericKind) -> Self {
    NumberError::RoundingNecessary { value: value.to_string(), from, to }
  }

  pub fn scale_overflow(literal: impl Into<String>) -> Self {
    NumberError::ScaleOverflow { literal: literal.into() }
  }

  pub fn invalid_argument(message: &'static str) -> Self {
    NumberError::InvalidArgument { message }
  }
}
