//! Everything the number factory accepts as input.

use super::Number;
use super::integer::Integer;
use super::decimal::Decimal;
use super::rational::Rational;

use num::BigInt;

use std::borrow::Cow;

/// A value on its way into the number factory.
///
/// Strings are classified against the literal grammar. Native
/// integers skip the grammar entirely. Floating-point values are
/// formatted with their shortest round-trip representation and then
/// treated like strings, unless the factory is configured to reject
/// them. Numbers that already have a kind pass straight through to
/// kind conversion.
#[derive(Debug, Clone)]
pub enum NumberInput<'a> {
  Literal(Cow<'a, str>),
  Native(BigInt),
  Float(String),
  Number(Number),
}

impl<'a> From<&'a str> for NumberInput<'a> {
  fn from(s: &'a str) -> Self {
    NumberInput::Literal(Cow::Borrowed(s))
  }
}

impl<'a> From<&'a String> for NumberInput<'a> {
  fn from(s: &'a String) -> Self {
    NumberInput::Literal(Cow::Borrowed(s))
  }
}

impl From<String> for NumberInput<'_> {
  fn from(s: String) -> Self {
    NumberInput::Literal(Cow::Owned(s))
  }
}

impl From<BigInt> for NumberInput<'_> {
  fn from(i: BigInt) -> Self {
    NumberInput::Native(i)
  }
}

impl From<&BigInt> for NumberInput<'_> {
  fn from(i: &BigInt) -> Self {
    NumberInput::Native(i.clone())
  }
}

macro_rules! input_from_native {
  ($($t:ty),* $(,)?) => {
    $(
      impl From<$t> for NumberInput<'_> {
        fn from(value: $t) -> Self {
          NumberInput::Native(BigInt::from(value))
        }
      }
    )*
  }
}

input_from_native!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// NaN and the infinities format as "NaN" and "inf", which the
// literal grammar rejects.
impl From<f64> for NumberInput<'_> {
  fn from(f: f64) -> Self {
    NumberInput::Float(f.to_string())
  }
}

impl From<f32> for NumberInput<'_> {
  fn from(f: f32) -> Self {
    NumberInput::Float(f.to_string())
  }
}

impl From<Number> for NumberInput<'_> {
  fn from(n: Number) -> Self {
    NumberInput::Number(n)
  }
}

impl From<&Number> for NumberInput<'_> {
  fn from(n: &Number) -> Self {
    NumberInput::Number(n.clone())
  }
}

impl From<Integer> for NumberInput<'_> {
  fn from(i: Integer) -> Self {
    NumberInput::Number(Number::Integer(i))
  }
}

impl From<Decimal> for NumberInput<'_> {
  fn from(d: Decimal) -> Self {
    NumberInput::Number(Number::Decimal(d))
  }
}

impl From<Rational> for NumberInput<'_> {
  fn from(r: Rational) -> Self {
    NumberInput::Number(Number::Rational(r))
  }
}
