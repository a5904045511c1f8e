//! `rows=`/`cols=` header of the matrix text format

use core::fmt;

use super::constants::{COLS_KEY, ROWS_KEY};
use crate::validation::parse_header_value;
use crate::{FormatError, FormatErrorKind};

/// The two header lines: logical shape of the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHeader {
    pub nrows: usize,
    pub ncols: usize,
}

impl MatrixHeader {
    pub const fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols }
    }

    /// Parse the header from the first lines of a source
    ///
    /// The first line must be `rows=<N>` and the second `cols=<M>`; a
    /// missing line yields [`FormatErrorKind::MissingHeader`].
    pub fn parse<'a, I>(lines: &mut I) -> Result<Self, FormatError>
    where
        I: Iterator<Item = &'a str>,
    {
        let nrows = Self::parse_line(lines.next(), 1, ROWS_KEY)?;
        let ncols = Self::parse_line(lines.next(), 2, COLS_KEY)?;
        Ok(Self { nrows, ncols })
    }

    fn parse_line(
        line: Option<&str>,
        line_no: usize,
        key: &'static str,
    ) -> Result<usize, FormatError> {
        let line = line
            .ok_or_else(|| FormatError::new(line_no, "", FormatErrorKind::MissingHeader(key)))?;
        parse_header_value(line, key)
            .map_err(|kind| FormatError::new(line_no, line.trim(), kind))
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
}

impl fmt::Display for MatrixHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{ROWS_KEY}={}", self.nrows)?;
        writeln!(f, "{COLS_KEY}={}", self.ncols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_parse_header() {
        let mut lines = "rows=3\ncols=4\n(0, 0, 1)".lines();
        assert_eq!(MatrixHeader::parse(&mut lines), Ok(MatrixHeader::new(3, 4)));
        assert_eq!(lines.next(), Some("(0, 0, 1)"));
    }

    #[test]
    fn test_missing_header() {
        let err = MatrixHeader::parse(&mut "rows=3".lines()).unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.kind, FormatErrorKind::MissingHeader("cols"));

        let err = MatrixHeader::parse(&mut "".lines()).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, FormatErrorKind::MissingHeader("rows"));
    }

    #[test]
    fn test_swapped_header() {
        let err = MatrixHeader::parse(&mut "cols=4\nrows=3".lines()).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, FormatErrorKind::MalformedHeader("rows"));
        assert_eq!(err.content, "cols=4");
    }

    #[test]
    fn test_display() {
        assert_eq!(MatrixHeader::new(2, 5).to_string(), "rows=2\ncols=5\n");
    }
}
