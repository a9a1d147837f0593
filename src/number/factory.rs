//! The number factory: classifies literals, canonicalizes their
//! digits, constructs the kind each literal naturally denotes, and
//! then converts to whichever kind the caller asked for.

use super::Number;
use super::integer::Integer;
use super::decimal::{Decimal, check_scale};
use super::rational::Rational;
use super::canonical::{canonicalize, strip_leading_zeros};
use super::error::NumberError;
use super::input::NumberInput;
use super::kind::NumericKind;
use super::literal::NumberLiteral;
use crate::util::sign::Sign;

use bitflags::bitflags;
use num::{BigInt, One};
use tracing::trace;

use std::str::FromStr;

bitflags! {
  /// Flags controlling how lenient the factory is. The default mode
  /// has no flags set.
  #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct FactoryMode: u8 {
    /// Trim surrounding whitespace from string literals before
    /// classifying them.
    const TRIM_WHITESPACE = 0b0001;
    /// Refuse floating-point inputs with a format error instead of
    /// formatting and parsing them.
    const REJECT_FLOATS = 0b0010;
  }
}

/// Entry point for constructing numbers. The factory itself holds
/// nothing but its [`FactoryMode`] and is cheap to copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFactory {
  mode: FactoryMode,
}

impl NumberFactory {
  pub fn new(mode: FactoryMode) -> Self {
    NumberFactory { mode }
  }

  pub fn mode(&self) -> FactoryMode {
    self.mode
  }

  /// Constructs a number from `value`. If `kind` is given, the number
  /// is converted to that kind after construction, which fails with
  /// [`NumberError::RoundingNecessary`] if the conversion is not
  /// exact.
  pub fn of<'a>(&self, value: impl Into<NumberInput<'a>>, kind: Option<NumericKind>) -> Result<Number, NumberError> {
    match value.into() {
      NumberInput::Literal(text) => self.parse(&text, kind),
      NumberInput::Native(value) => Ok(from_native(value, kind)),
      NumberInput::Float(text) => {
        if self.mode.contains(FactoryMode::REJECT_FLOATS) {
          return Err(NumberError::format(text));
        }
        self.parse(&text, kind)
      }
      NumberInput::Number(number) => convert_to(number, kind),
    }
  }

  /// Classifies and constructs a string literal. Errors quote `text`
  /// exactly as given, surrounding whitespace included.
  pub fn parse(&self, text: &str, kind: Option<NumericKind>) -> Result<Number, NumberError> {
    let trimmed = if self.mode.contains(FactoryMode::TRIM_WHITESPACE) { text.trim() } else { text };
    let literal = NumberLiteral::classify(trimmed).map_err(|_| NumberError::format(text))?;
    trace!(literal = trimmed, kind = %literal.kind(), "classified number literal");
    build(&literal, text, kind)
  }
}

/// Builds the natural kind of number for a classified literal, then
/// converts it to `kind` if one is requested.
pub fn construct(literal: &NumberLiteral<'_>, kind: Option<NumericKind>) -> Result<Number, NumberError> {
  build(literal, &literal.to_string(), kind)
}

/// [`construct`], quoting `text` in any error.
fn build(literal: &NumberLiteral<'_>, text: &str, kind: Option<NumericKind>) -> Result<Number, NumberError> {
  let overflow = || NumberError::scale_overflow(text);
  let number = match *literal {
    NumberLiteral::Integer { sign, digits } => {
      let value = parse_canonical(&canonicalize(&signed(sign, digits)), text)?;
      Number::Integer(Integer::from(value))
    }
    NumberLiteral::Decimal { sign, integral, fractional, exponent } => {
      let mut unscaled = canonicalize(&format!("{}{integral}{fractional}", signed(sign, "")));
      let exponent = match exponent {
        None => 0,
        Some(exponent) => i64::from_str(exponent).map_err(|_| overflow())?,
      };
      let scale = i64::try_from(fractional.len()).ok()
        .and_then(|len| len.checked_sub(exponent))
        .ok_or_else(overflow)?;
      // A negative scale becomes trailing zeros on the unscaled value,
      // bounded like the scale itself.
      let scale = if scale < 0 {
        let padding = u32::try_from(scale.unsigned_abs()).map_err(|_| overflow())?;
        let padding = check_scale(padding, || text.to_owned())?;
        if unscaled != "0" {
          unscaled.extend(std::iter::repeat('0').take(padding as usize));
        }
        0
      } else {
        let scale = u32::try_from(scale).map_err(|_| overflow())?;
        check_scale(scale, || text.to_owned())?
      };
      Number::Decimal(Decimal::from_parts(parse_canonical(&unscaled, text)?, scale))
    }
    NumberLiteral::Rational { sign, numerator, denominator } => {
      let numerator = parse_canonical(&canonicalize(&signed(sign, numerator)), text)?;
      let denominator = strip_leading_zeros(denominator);
      if denominator.is_empty() {
        return Err(NumberError::division_by_zero(text));
      }
      let denominator = parse_canonical(denominator, text)?;
      Number::Rational(Rational::new_trusted(numerator, denominator))
    }
  };
  convert_to(number, kind)
}

/// Converts an already-constructed number, returning it unchanged if
/// it is already of the requested kind.
fn convert_to(number: Number, kind: Option<NumericKind>) -> Result<Number, NumberError> {
  match kind {
    Some(kind) => number.convert(kind),
    None => Ok(number),
  }
}

/// Native integers are always exact in every kind, so they are built
/// directly in the requested kind.
fn from_native(value: BigInt, kind: Option<NumericKind>) -> Number {
  match kind.unwrap_or(NumericKind::Integer) {
    NumericKind::Integer => Number::Integer(Integer::from(value)),
    NumericKind::Decimal => Number::Decimal(Decimal::from_parts(value, 0)),
    NumericKind::Rational => Number::Rational(Rational::new_trusted(value, BigInt::one())),
  }
}

fn signed(sign: Option<Sign>, digits: &str) -> String {
  match sign {
    Some(sign) => format!("{sign}{digits}"),
    None => digits.to_owned(),
  }
}

fn parse_canonical(digits: &str, text: &str) -> Result<BigInt, NumberError> {
  BigInt::from_str(digits).map_err(|_| NumberError::format(text))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::number::traits::ExactNumber;
  use crate::number::decimal::MAX_SCALE;
  use crate::{assert_strict_eq, assert_strict_ne};

  fn decimal_parts(number: &Number) -> (String, u32) {
    match number {
      Number::Decimal(d) => (d.unscaled_value().to_string(), d.scale()),
      other => panic!("expected a decimal, got {other:?}"),
    }
  }

  #[test]
  fn test_natural_kinds() {
    let factory = NumberFactory::default();
    assert_eq!(factory.of("12", None).unwrap().kind(), NumericKind::Integer);
    assert_eq!(factory.of("1.2", None).unwrap().kind(), NumericKind::Decimal);
    assert_eq!(factory.of("12e0", None).unwrap().kind(), NumericKind::Decimal);
    assert_eq!(factory.of("1/2", None).unwrap().kind(), NumericKind::Rational);
    assert_eq!(factory.of(12, None).unwrap().kind(), NumericKind::Integer);
  }

  #[test]
  fn test_decimal_scale_from_exponent() {
    let factory = NumberFactory::default();
    assert_eq!(decimal_parts(&factory.of("1.230e2", None).unwrap()), ("1230".to_owned(), 1));
    assert_eq!(decimal_parts(&factory.of("1.5e3", None).unwrap()), ("1500".to_owned(), 0));
    assert_eq!(decimal_parts(&factory.of("-0.25e-2", None).unwrap()), ("-25".to_owned(), 4));
    assert_eq!(decimal_parts(&factory.of("0.000", None).unwrap()), ("0".to_owned(), 3));
    assert_eq!(decimal_parts(&factory.of("-0e5", None).unwrap()), ("0".to_owned(), 0));
    assert_eq!(decimal_parts(&factory.of("007.50", None).unwrap()), ("750".to_owned(), 2));
  }

  #[test]
  fn test_boundary_literals() {
    let factory = NumberFactory::default();
    assert_strict_eq!(factory.of("1.230e2", Some(NumericKind::Integer)).unwrap(), Number::from(123));
    assert_strict_eq!(factory.of("0.000", Some(NumericKind::Integer)).unwrap(), Number::from(0));
    assert_strict_eq!(factory.of("10/5", Some(NumericKind::Integer)).unwrap(), Number::from(2));
  }

  #[test]
  fn test_requested_kind() {
    let factory = NumberFactory::default();
    let number = factory.of("3", Some(NumericKind::Rational)).unwrap();
    assert_eq!(number.kind(), NumericKind::Rational);
    assert_eq!(number.to_string(), "3/1");
    let number = factory.of("1/4", Some(NumericKind::Decimal)).unwrap();
    assert_eq!(number.to_string(), "0.25");
    assert_eq!(
      factory.of("1/3", Some(NumericKind::Decimal)),
      Err(NumberError::rounding_necessary("1/3", NumericKind::Rational, NumericKind::Decimal)),
    );
  }

  #[test]
  fn test_native_integers_skip_grammar() {
    let factory = NumberFactory::default();
    let number = factory.of(-45i64, Some(NumericKind::Decimal)).unwrap();
    assert_eq!(decimal_parts(&number), ("-45".to_owned(), 0));
    let number = factory.of(7u8, Some(NumericKind::Rational)).unwrap();
    assert_eq!(number.to_string(), "7/1");
    let number = factory.of(BigInt::from(10).pow(30), None).unwrap();
    assert_eq!(number.to_string(), format!("1{}", "0".repeat(30)));
  }

  #[test]
  fn test_typed_numbers_only_convert() {
    let factory = NumberFactory::default();
    let integer = Integer::from(BigInt::from(99));
    let number = factory.of(integer, Some(NumericKind::Decimal)).unwrap();
    assert_eq!(decimal_parts(&number), ("99".to_owned(), 0));

    let decimal = Decimal::from_parts(150, 2);
    let number = factory.of(decimal.clone(), None).unwrap();
    assert_strict_eq!(number, Number::Decimal(decimal));
  }

  #[test]
  fn test_malformed_literals() {
    let factory = NumberFactory::default();
    assert_eq!(factory.of("", None), Err(NumberError::format("")));
    assert_eq!(factory.of("1.2.3", None), Err(NumberError::format("1.2.3")));
    assert_eq!(factory.of("abc", None), Err(NumberError::format("abc")));
    assert_eq!(factory.of("1/0", None), Err(NumberError::division_by_zero("1/0")));
    assert_eq!(factory.of("-5/00", None), Err(NumberError::division_by_zero("-5/00")));
  }

  #[test]
  fn test_exponent_out_of_range() {
    let factory = NumberFactory::default();
    assert_eq!(factory.of("1e-99999999999", None), Err(NumberError::scale_overflow("1e-99999999999")));
    assert_eq!(
      factory.of("1e99999999999999999999", None),
      Err(NumberError::scale_overflow("1e99999999999999999999")),
    );
  }

  #[test]
  fn test_large_padding_is_refused() {
    let factory = NumberFactory::default();
    assert_eq!(factory.of("1e3000000000", None), Err(NumberError::scale_overflow("1e3000000000")));
    let past_bound = format!("1e{}", MAX_SCALE + 1);
    assert_eq!(factory.of(past_bound.as_str(), None), Err(NumberError::scale_overflow(past_bound.clone())));
    // Zero needs no padding, but the exponent is still out of range.
    assert_eq!(factory.of("0e3000000000", None), Err(NumberError::scale_overflow("0e3000000000")));
    let padded = factory.of("-2e1000", None).unwrap();
    assert_eq!(decimal_parts(&padded), (format!("-2{}", "0".repeat(1000)), 0));
  }

  #[test]
  fn test_large_scale_is_refused() {
    let factory = NumberFactory::default();
    assert_eq!(factory.of("1e-4000000000", None), Err(NumberError::scale_overflow("1e-4000000000")));
    let past_bound = format!("0.5e-{MAX_SCALE}");
    assert_eq!(factory.of(past_bound.as_str(), None), Err(NumberError::scale_overflow(past_bound.clone())));
    let at_bound = factory.of(format!("1e-{MAX_SCALE}"), None).unwrap();
    assert_eq!(decimal_parts(&at_bound), ("1".to_owned(), MAX_SCALE));
  }

  #[test]
  fn test_errors_quote_the_input() {
    let factory = NumberFactory::default();
    assert_eq!(
      factory.of("1E99999999999999999999", None),
      Err(NumberError::scale_overflow("1E99999999999999999999")),
    );
    let lenient = NumberFactory::new(FactoryMode::TRIM_WHITESPACE);
    assert_eq!(lenient.of(" 1/0 ", None), Err(NumberError::division_by_zero(" 1/0 ")));
    assert_eq!(lenient.of(" 1e-4000000000\t", None), Err(NumberError::scale_overflow(" 1e-4000000000\t")));
    assert_eq!(lenient.of("  x ", None), Err(NumberError::format("  x ")));
  }

  #[test]
  fn test_trim_whitespace_mode() {
    let strict = NumberFactory::default();
    let lenient = NumberFactory::new(FactoryMode::TRIM_WHITESPACE);
    assert_eq!(strict.of(" 12 ", None), Err(NumberError::format(" 12 ")));
    assert_strict_eq!(lenient.of(" 12\n", None).unwrap(), Number::from(12));
    assert_eq!(lenient.of("1 2", None), Err(NumberError::format("1 2")));
  }

  #[test]
  fn test_float_inputs() {
    let factory = NumberFactory::default();
    assert_strict_eq!(factory.of(0.5f64, None).unwrap(), Number::Decimal(Decimal::from_parts(5, 1)));
    assert_strict_eq!(factory.of(2.0f64, None).unwrap(), Number::from(2));
    assert_strict_ne!(factory.of(2.0f64, None).unwrap(), Number::Decimal(Decimal::from_parts(2, 0)));
    assert_eq!(factory.of(f64::INFINITY, None), Err(NumberError::format("inf")));
    assert_eq!(factory.of(f64::NAN, None), Err(NumberError::format("NaN")));

    let rejecting = NumberFactory::new(FactoryMode::REJECT_FLOATS);
    assert_eq!(rejecting.of(0.5f64, None), Err(NumberError::format("0.5")));
    assert!(rejecting.of("0.5", None).is_ok());
  }

  #[test]
  fn test_construct_from_classified_literal() {
    let literal = NumberLiteral::classify("-0012").unwrap();
    assert_strict_eq!(construct(&literal, None).unwrap(), Number::from(-12));
    let literal = NumberLiteral::classify("6/4").unwrap();
    assert_eq!(construct(&literal, None).unwrap().to_string(), "6/4");
    assert_eq!(construct(&literal, Some(NumericKind::Decimal)).unwrap().to_string(), "1.5");
  }
}
