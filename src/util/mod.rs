//! Various utility types.

pub mod sign;
