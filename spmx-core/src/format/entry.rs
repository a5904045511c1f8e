//! `(row, col, value)` entry lines of the matrix text format

use alloc::vec::Vec;
use core::fmt;

use super::constants::{ENTRY_CLOSE, ENTRY_FIELDS, ENTRY_OPEN, FIELD_SEPARATOR};
use crate::validation::{parse_index, parse_value};
use crate::{FormatError, FormatErrorKind, MatrixElement};

/// A stored `(row, col, value)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Entry<T> {
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    pub const fn coordinate(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl<T: MatrixElement> Entry<T> {
    /// Parse one data line; `line_no` is 1-based and only used for errors
    ///
    /// Surrounding whitespace is ignored. Zero values parse successfully;
    /// dropping them is up to the matrix.
    pub fn parse_line(line_no: usize, line: &str) -> Result<Self, FormatError> {
        let line = line.trim();
        let err = |kind| FormatError::new(line_no, line, kind);

        let inner = line
            .strip_prefix(ENTRY_OPEN)
            .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
            .ok_or_else(|| err(FormatErrorKind::MissingParentheses))?;

        let fields: Vec<&str> = inner.split(FIELD_SEPARATOR).collect();
        if fields.len() != ENTRY_FIELDS {
            return Err(err(FormatErrorKind::FieldCount(fields.len())));
        }

        Ok(Self {
            row: parse_index(fields[0]).map_err(err)?,
            col: parse_index(fields[1]).map_err(err)?,
            value: parse_value(fields[2]).map_err(err)?,
        })
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ENTRY_OPEN}{}{FIELD_SEPARATOR} {}{FIELD_SEPARATOR} {}{ENTRY_CLOSE}",
            self.row, self.col, self.value
        )
    }
}

impl<T> From<((usize, usize), T)> for Entry<T> {
    fn from(((row, col), value): ((usize, usize), T)) -> Self {
        Self { row, col, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            Entry::<i64>::parse_line(3, "(1, 2, 3)"),
            Ok(Entry::new(1, 2, 3))
        );
        assert_eq!(
            Entry::<i64>::parse_line(3, "  (0,0,-5)\t"),
            Ok(Entry::new(0, 0, -5))
        );
        assert_eq!(
            Entry::<i64>::parse_line(3, "(+1, +2, +3)"),
            Ok(Entry::new(1, 2, 3))
        );
        assert_eq!(
            Entry::<i64>::parse_line(3, "( 4 ,  5 , 0 )"),
            Ok(Entry::new(4, 5, 0))
        );
    }

    #[test]
    fn test_missing_parentheses() {
        let err = Entry::<i64>::parse_line(7, "1,2,3)").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::MissingParentheses);
        assert_eq!(err.line, 7);
        assert_eq!(err.content, "1,2,3)");

        let err = Entry::<i64>::parse_line(7, "(1,2,3").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::MissingParentheses);

        let err = Entry::<i64>::parse_line(7, "(").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::MissingParentheses);
    }

    #[test]
    fn test_field_count() {
        let err = Entry::<i64>::parse_line(3, "(1, 2)").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::FieldCount(2));

        let err = Entry::<i64>::parse_line(3, "(1, 2, 3, 4)").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::FieldCount(4));

        let err = Entry::<i64>::parse_line(3, "()").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::FieldCount(1));
    }

    #[test]
    fn test_invalid_integer() {
        for line in [
            "(a, 2, 3)",
            "(1, -2, 3)",
            "(1, 2, 3.5)",
            "(1, 2, )",
            "(1, ++2, 3)",
        ] {
            let err = Entry::<i64>::parse_line(3, line).unwrap_err();
            assert_eq!(err.kind, FormatErrorKind::InvalidInteger, "{line}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Entry::new(1, 2, -3i64).to_string(), "(1, 2, -3)");
    }
}
