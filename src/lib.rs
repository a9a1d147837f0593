//! Exact integer, decimal, and rational numbers, built from literals
//! by a single parse-and-dispatch factory.
//!
//! See [`number`] for the details of the literal grammar, the kind
//! conversions, and the shared ordering.

pub mod number;
pub mod util;

pub use number::{Number, NumberError, NumericKind, ExactNumber};
