//! Token parsing for the matrix text format
//!
//! Each helper trims surrounding whitespace from its token and reports a
//! [`FormatErrorKind`] on failure; the caller attaches line context.

use crate::{FormatErrorKind, MatrixElement};

/// Parse the value half of a `key=value` header line
///
/// The key must equal `key` after trimming, and the value must be a
/// non-negative integer.
pub fn parse_header_value(line: &str, key: &'static str) -> Result<usize, FormatErrorKind> {
    let (name, value) = line
        .split_once('=')
        .ok_or(FormatErrorKind::MalformedHeader(key))?;

    if name.trim() != key {
        return Err(FormatErrorKind::MalformedHeader(key));
    }

    parse_unsigned(value.trim()).ok_or(FormatErrorKind::MalformedHeader(key))
}

/// Parse a row or column index
pub fn parse_index(token: &str) -> Result<usize, FormatErrorKind> {
    parse_unsigned(token.trim()).ok_or(FormatErrorKind::InvalidInteger)
}

/// Parse an element value of type `T`
pub fn parse_value<T: MatrixElement>(token: &str) -> Result<T, FormatErrorKind> {
    token
        .trim()
        .parse::<T>()
        .map_err(|_| FormatErrorKind::InvalidInteger)
}

/// Digits with an optional leading `+`, same as element values
fn parse_unsigned(s: &str) -> Option<usize> {
    let digits = s.strip_prefix('+').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
