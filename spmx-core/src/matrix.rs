//! Coordinate-keyed sparse matrix
//!
//! [`SparseMatrix`] stores only non-zero values in a hash map keyed by
//! `(row, col)`. Absence of a key means zero; a zero is never stored.
//!
//! Arithmetic never mutates its operands and always returns a fresh matrix.
//! Addition and subtraction cost is proportional to the non-zero count of
//! both operands. Multiplication iterates the left operand's non-zero
//! entries against every column of the right operand.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use hashbrown::HashMap;

use crate::traits::element::checked_sum;
use crate::validation::{check_index, check_product_shape, check_same_shape};
use crate::{
    Entry, MatrixAccess, MatrixElement, MatrixError, MatrixHeader, MatrixOperations, Operation,
    Result,
};

/// Sparse matrix of integers
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T = i64> {
    nrows: usize,
    ncols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty `nrows x ncols` matrix
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: HashMap::new(),
        }
    }

    /// Create an `n x n` matrix with one on the diagonal
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.set_element(i, i, T::ONE);
        }
        matrix
    }

    /// Build a matrix from `(row, col, value)` entries
    ///
    /// Zero values are dropped and a later entry for the same coordinate
    /// overwrites an earlier one. Coordinates are not bounds-checked.
    pub fn from_entries<I>(nrows: usize, ncols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = Entry<T>>,
    {
        let mut matrix = Self::new(nrows, ncols);
        for entry in entries {
            matrix.set_element(entry.row, entry.col, entry.value);
        }
        matrix
    }

    /// Parse a matrix from its text form
    ///
    /// Lines after the two header lines are trimmed; blank ones are
    /// skipped and every other one must be a parenthesized triple.
    pub fn from_text(source: &str) -> Result<Self> {
        let mut lines = source.lines();
        let header = MatrixHeader::parse(&mut lines)?;
        let mut matrix = Self::new(header.nrows, header.ncols);

        // Header occupies lines 1 and 2
        for (line_no, line) in (3..).zip(lines) {
            if line.trim().is_empty() {
                continue;
            }
            let entry = Entry::<T>::parse_line(line_no, line)?;
            matrix.set_element(entry.row, entry.col, entry.value);
        }

        Ok(matrix)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn header(&self) -> MatrixHeader {
        MatrixHeader::new(self.nrows, self.ncols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set the value at `(row, col)`
    ///
    /// Storing zero removes the coordinate. The coordinate is not checked
    /// against the declared shape; see [`Self::try_set_element`].
    pub fn set_element(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Bounds-checked [`Self::set_element`]
    pub fn try_set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index(row, col, self.dimensions())?;
        self.set_element(row, col, value);
        Ok(())
    }

    /// Get the value at `(row, col)`, zero if nothing is stored there
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or(T::ZERO)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Iterate stored entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        self.entries.iter().map(|(&coord, &value)| Entry::from((coord, value)))
    }

    /// Stored entries in row-major order
    pub fn sorted_entries(&self) -> Vec<Entry<T>> {
        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_unstable_by_key(Entry::coordinate);
        entries
    }

    /// Verify every stored coordinate lies inside the declared shape
    pub fn check_bounds(&self) -> Result<()> {
        let shape = self.dimensions();
        for entry in self.sorted_entries() {
            check_index(entry.row, entry.col, shape)?;
        }
        Ok(())
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            entries: self
                .entries
                .iter()
                .map(|(&(row, col), &value)| ((col, row), value))
                .collect(),
        }
    }

    /// Entry-wise sum of two same-shaped matrices
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self> {
        check_same_shape(Operation::Add, self.dimensions(), other.dimensions())?;
        self.combine(other, T::checked_add, Some)
    }

    /// Entry-wise difference of two same-shaped matrices
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        check_same_shape(Operation::Subtract, self.dimensions(), other.dimensions())?;
        self.combine(other, T::checked_sub, T::checked_neg)
    }

    /// Two-pass sparse sweep shared by add and subtract
    ///
    /// Pass one visits every coordinate stored in `self` and writes
    /// `op(self, other)`. Pass two visits the coordinates stored only in
    /// `other` and writes `other_only(other)`.
    fn combine(
        &self,
        other: &Self,
        op: impl Fn(T, T) -> Option<T>,
        other_only: impl Fn(T) -> Option<T>,
    ) -> Result<Self> {
        let mut result = Self::new(self.nrows, self.ncols);

        for (&(row, col), &value) in &self.entries {
            let combined = op(value, other.get_element(row, col))
                .ok_or(MatrixError::Overflow { row, col })?;
            result.set_element(row, col, combined);
        }

        for (&(row, col), &value) in &other.entries {
            if self.entries.contains_key(&(row, col)) {
                continue;
            }
            let value = other_only(value).ok_or(MatrixError::Overflow { row, col })?;
            result.set_element(row, col, value);
        }

        Ok(result)
    }

    /// Matrix product `self * other`
    ///
    /// Rows of `self` are visited in order. For each stored `self[(i, k)]`
    /// the inner loop scans every column `j` of `other`, collecting the
    /// product `self[(i, k)] * other[(k, j)]` as a term of `result[(i, j)]`.
    /// Terms are summed with [`checked_sum`], so a cell fails with
    /// [`MatrixError::Overflow`] only when one product or the cell's total
    /// does not fit `T`. Cells that sum to zero are dropped.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let (nrows, ncols) = check_product_shape(self.dimensions(), other.dimensions())?;
        let mut result = Self::new(nrows, ncols);

        for (row, row_entries) in self.rows() {
            for (col, value) in Self::multiply_row(row, &row_entries, other)? {
                result.set_element(row, col, value);
            }
        }

        Ok(result)
    }

    /// Row `i`'s contribution to `self * other`, as sorted `(col, value)`
    ///
    /// `row_entries` are the `(k, value)` pairs stored in row `i` of the left
    /// operand. Used to split a product into independent per-row jobs.
    pub fn multiply_row(
        row: usize,
        row_entries: &[(usize, T)],
        other: &Self,
    ) -> Result<Vec<(usize, T)>> {
        let mut terms: HashMap<usize, Vec<T>> = HashMap::new();

        for &(k, value) in row_entries {
            for j in 0..other.ncols {
                let product = value
                    .checked_mul(other.get_element(k, j))
                    .ok_or(MatrixError::Overflow { row, col: j })?;
                if !product.is_zero() {
                    terms.entry(j).or_default().push(product);
                }
            }
        }

        let mut cols: Vec<_> = terms.into_iter().collect();
        cols.sort_unstable_by_key(|&(col, _)| col);

        let mut out = Vec::with_capacity(cols.len());
        for (col, cell) in cols {
            let sum = checked_sum(cell).ok_or(MatrixError::Overflow { row, col })?;
            if !sum.is_zero() {
                out.push((col, sum));
            }
        }
        Ok(out)
    }

    /// Group stored entries by row, each row's `(col, value)` pairs sorted
    pub fn rows(&self) -> Vec<(usize, Vec<(usize, T)>)> {
        let mut by_row: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (&(row, col), &value) in &self.entries {
            by_row.entry(row).or_default().push((col, value));
        }

        let mut rows: Vec<_> = by_row.into_iter().collect();
        for (_, cols) in rows.iter_mut() {
            cols.sort_unstable_by_key(|&(col, _)| col);
        }
        rows.sort_unstable_by_key(|&(row, _)| row);
        rows
    }
}

impl<T: MatrixElement> MatrixAccess for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> T {
        SparseMatrix::get_element(self, row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut row: Vec<_> = self
            .entries
            .iter()
            .filter(|(&(r, _), _)| r == row_index)
            .map(|(&(_, c), &value)| (c, value))
            .collect();
        row.sort_unstable_by_key(|&(c, _)| c);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut col: Vec<_> = self
            .entries
            .iter()
            .filter(|(&(_, c), _)| c == col_index)
            .map(|(&(r, _), &value)| (r, value))
            .collect();
        col.sort_unstable_by_key(|&(r, _)| r);
        col
    }
}

impl<T: MatrixElement> FromStr for SparseMatrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

/// Serializes to the text format, entries in row-major order
impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())?;
        for entry in self.sorted_entries() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
