//! Canonical digit strings. A canonical string has no leading zeros
//! (except for the string `"0"` itself) and carries a sign only when
//! it is negative.

use crate::util::sign::Sign;

/// Canonicalizes a digit string with an optional leading sign.
///
/// The input must be non-empty and, after the optional sign, consist
/// only of ASCII digits. Callers obtain such strings from the literal
/// grammar, so this function does no validation of its own.
pub fn canonicalize(digits: &str) -> String {
  let (sign, rest) = Sign::split(digits);
  let rest = strip_leading_zeros(rest);
  if rest.is_empty() {
    String::from("0")
  } else if sign.is_some_and(Sign::is_negative) {
    format!("-{rest}")
  } else {
    rest.to_owned()
  }
}

/// Removes every leading `'0'`. Unlike [`canonicalize`], this may
/// return an empty string.
pub fn strip_leading_zeros(digits: &str) -> &str {
  digits.trim_start_matches('0')
}
