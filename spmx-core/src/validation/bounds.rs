//! Shape and index validation
//!
//! Pure checks shared by the arithmetic operations and the bounds-checked
//! mutators.

use crate::{MatrixError, Operation};

/// Require identical shapes, as addition and subtraction do
pub fn check_same_shape(
    operation: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), MatrixError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(MatrixError::DimensionMismatch {
            operation,
            left,
            right,
        });
    }
    Ok(())
}

/// Require `left.cols == right.rows` and return the product shape
pub fn check_product_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(usize, usize), MatrixError> {
    if left.1 != right.0 {
        return Err(MatrixError::DimensionMismatch {
            operation: Operation::Multiply,
            left,
            right,
        });
    }
    Ok((left.0, right.1))
}

/// Require `(row, col)` to lie inside `shape`
pub fn check_index(row: usize, col: usize, shape: (usize, usize)) -> Result<(), MatrixError> {
    if row >= shape.0 || col >= shape.1 {
        return Err(MatrixError::IndexOutOfBounds {
            row,
            col,
            nrows: shape.0,
            ncols: shape.1,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_same_shape() {
        assert_eq!(check_same_shape(Operation::Add, (2, 3), (2, 3)), Ok(()));
        assert_eq!(
            check_same_shape(Operation::Subtract, (2, 3), (3, 3)),
            Err(MatrixError::DimensionMismatch {
                operation: Operation::Subtract,
                left: (2, 3),
                right: (3, 3),
            })
        );
        assert!(check_same_shape(Operation::Add, (2, 3), (2, 4)).is_err());
    }

    #[test]
    fn test_check_product_shape() {
        assert_eq!(check_product_shape((2, 3), (3, 5)), Ok((2, 5)));
        assert_eq!(check_product_shape((0, 0), (0, 4)), Ok((0, 4)));
        assert!(check_product_shape((2, 3), (2, 3)).is_err());
    }

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 0, (1, 1)), Ok(()));
        assert_eq!(check_index(1, 2, (2, 3)), Ok(()));
        assert_eq!(
            check_index(2, 0, (2, 3)),
            Err(MatrixError::IndexOutOfBounds {
                row: 2,
                col: 0,
                nrows: 2,
                ncols: 3
            })
        );
        assert!(check_index(0, 3, (2, 3)).is_err());
        assert!(check_index(0, 0, (0, 0)).is_err());
    }
}
