//! Error types for SPMX operations

use alloc::string::String;
use core::fmt;

/// Arithmetic operation that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "addition"),
            Operation::Subtract => write!(f, "subtraction"),
            Operation::Multiply => write!(f, "multiplication"),
        }
    }
}

/// What was wrong with a line of matrix text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Source ended before the `rows=` or `cols=` header
    MissingHeader(&'static str),
    /// Header line is not `<key>=<non-negative integer>`
    MalformedHeader(&'static str),
    /// Data line is not wrapped in `(` and `)`
    MissingParentheses,
    /// Data line does not hold exactly three comma-separated fields
    FieldCount(usize),
    /// A field is not an integer of the expected type
    InvalidInteger,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatErrorKind::MissingHeader(key) => write!(f, "missing `{key}=` header"),
            FormatErrorKind::MalformedHeader(key) => {
                write!(f, "expected `{key}=<non-negative integer>`")
            }
            FormatErrorKind::MissingParentheses => {
                write!(f, "entry must be wrapped in parentheses")
            }
            FormatErrorKind::FieldCount(n) => {
                write!(f, "entry must have 3 fields (row, col, value), found {n}")
            }
            FormatErrorKind::InvalidInteger => write!(f, "invalid integer"),
        }
    }
}

/// A parse failure, with the 1-based line number and the offending text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub line: usize,
    pub content: String,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub fn new(line: usize, content: &str, kind: FormatErrorKind) -> Self {
        Self {
            line,
            content: content.into(),
            kind,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} (`{}`)", self.line, self.kind, self.content)
    }
}

/// Errors that can occur during SPMX operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Malformed serialized matrix
    Format(FormatError),
    /// Operand shapes are incompatible for the operation
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Checked integer arithmetic overflowed while computing a coordinate
    Overflow { row: usize, col: usize },
    /// Coordinate lies outside the declared shape
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
}

/// Broad classification of a [`MatrixError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Dimension,
    Arithmetic,
    Bounds,
}

impl MatrixError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::Format(_) => ErrorCategory::Format,
            MatrixError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            MatrixError::Overflow { .. } => ErrorCategory::Arithmetic,
            MatrixError::IndexOutOfBounds { .. } => ErrorCategory::Bounds,
        }
    }
}

impl From<FormatError> for MatrixError {
    fn from(err: FormatError) -> Self {
        MatrixError::Format(err)
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Format(err) => write!(f, "Input has wrong format: {err}"),
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "Matrix dimensions do not match for {operation}: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::Overflow { row, col } => {
                write!(f, "Integer overflow at ({row}, {col})")
            }
            MatrixError::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "Index ({row}, {col}) out of bounds for {nrows}x{ncols} matrix"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrixError::Format(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for SPMX operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_messages() {
        let err = MatrixError::DimensionMismatch {
            operation: Operation::Add,
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(
            err.to_string(),
            "Matrix dimensions do not match for addition: 2x3 and 3x2"
        );

        let err: MatrixError =
            FormatError::new(3, "1,2,3)", FormatErrorKind::MissingParentheses).into();
        assert_eq!(
            err.to_string(),
            "Input has wrong format: line 3: entry must be wrapped in parentheses (`1,2,3)`)"
        );
    }

    #[test]
    fn test_category() {
        let format: MatrixError =
            FormatError::new(1, "", FormatErrorKind::MissingHeader("rows")).into();
        assert_eq!(format.category(), ErrorCategory::Format);
        assert_eq!(
            MatrixError::Overflow { row: 0, col: 0 }.category(),
            ErrorCategory::Arithmetic
        );
        assert_eq!(
            MatrixError::IndexOutOfBounds {
                row: 5,
                col: 0,
                nrows: 2,
                ncols: 2
            }
            .category(),
            ErrorCategory::Bounds
        );
    }
}
