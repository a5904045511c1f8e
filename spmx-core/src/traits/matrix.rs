//! Format-agnostic matrix access traits
//!
//! These are pure interfaces; [`crate::SparseMatrix`] is the concrete
//! implementation.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// Core sparse matrix trait for read access
pub trait MatrixAccess {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns zero when nothing is stored at the coordinate, including
    /// coordinates outside the declared shape.
    fn get_element(&self, row: usize, col: usize) -> Self::Element;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    fn nrows(&self) -> usize {
        self.dimensions().0
    }

    fn ncols(&self) -> usize {
        self.dimensions().1
    }

    /// Fraction of cells holding a non-zero value, 0.0 for empty shapes
    fn density(&self) -> f64 {
        let (nrows, ncols) = self.dimensions();
        let cells = nrows as f64 * ncols as f64;
        if cells == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / cells
        }
    }
}

/// Extension trait for row/column extraction
pub trait MatrixOperations: MatrixAccess {
    /// Get all non-zero `(col, value)` pairs in a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all non-zero `(row, value)` pairs in a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
