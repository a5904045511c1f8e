//! Row-partitioned parallel multiplication and operation dispatch
//!
//! The left operand's entries are grouped by row. Each row's slice of the
//! product only reads shared operands and writes its own accumulator, so
//! rows are computed independently and merged afterwards.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use spmx_core::validation::check_product_shape;
use spmx_core::{Entry, MatrixElement, Operation, SparseMatrix};
use tracing::debug;

use crate::config::ComputeConfig;
use crate::error::Result;

/// Matrix product computed one row per task
///
/// Produces the same matrix and the same errors as
/// [`SparseMatrix::multiply`]. Without the `parallel` feature the rows are
/// processed on the calling thread.
pub fn par_multiply<T>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>>
where
    T: MatrixElement + Send + Sync,
{
    let (nrows, ncols) = check_product_shape(left.dimensions(), right.dimensions())?;
    let rows = left.rows();
    let multiply_row = |(row, cols): &(usize, Vec<(usize, T)>)| {
        SparseMatrix::multiply_row(*row, cols, right).map(|out| (*row, out))
    };

    // Collected in row order so the first error matches the sequential one
    #[cfg(feature = "parallel")]
    let partials: Vec<_> = rows.par_iter().map(multiply_row).collect();

    #[cfg(not(feature = "parallel"))]
    let partials: Vec<_> = rows.iter().map(multiply_row).collect();

    let partials = partials
        .into_iter()
        .collect::<spmx_core::Result<Vec<_>>>()?;

    // Rows are disjoint, so merging never overwrites
    let entries = partials.into_iter().flat_map(|(row, cols)| {
        cols.into_iter()
            .map(move |(col, value)| Entry::new(row, col, value))
    });

    Ok(SparseMatrix::from_entries(nrows, ncols, entries))
}

/// Run `operation` on two matrices as described by `config`
pub fn compute<T>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
    operation: Operation,
    config: &ComputeConfig,
) -> Result<SparseMatrix<T>>
where
    T: MatrixElement + Send + Sync,
{
    let start = Instant::now();

    let result = match operation {
        Operation::Add => left.add(right)?,
        Operation::Subtract => left.subtract(right)?,
        Operation::Multiply if config.parallel => with_pool(config, || par_multiply(left, right))?,
        Operation::Multiply => left.multiply(right)?,
    };

    debug!(
        %operation,
        parallel = config.parallel,
        nnz = result.nnz(),
        elapsed = ?start.elapsed(),
        "computed result"
    );
    Ok(result)
}

#[cfg(feature = "parallel")]
fn with_pool<R: Send>(config: &ComputeConfig, job: impl FnOnce() -> Result<R> + Send) -> Result<R> {
    match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| crate::SpmxError::ThreadPool(e.to_string()))?
            .install(job),
        None => job(),
    }
}

#[cfg(not(feature = "parallel"))]
fn with_pool<R>(config: &ComputeConfig, job: impl FnOnce() -> Result<R>) -> Result<R> {
    if config.threads.is_some() {
        tracing::warn!("built without the `parallel` feature, ignoring thread count");
    }
    job()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use spmx_core::MatrixError;

    fn random_matrix(rng: &mut StdRng, nrows: usize, ncols: usize, nnz: usize) -> SparseMatrix {
        let mut m = SparseMatrix::new(nrows, ncols);
        for _ in 0..nnz {
            m.set_element(
                rng.gen_range(0..nrows),
                rng.gen_range(0..ncols),
                rng.gen_range(-9..=9),
            );
        }
        m
    }

    #[test]
    fn test_par_multiply_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..25 {
            let a = random_matrix(&mut rng, 12, 7, 30);
            let b = random_matrix(&mut rng, 7, 9, 30);
            assert_eq!(par_multiply(&a, &b).unwrap(), a.multiply(&b).unwrap());
        }
    }

    #[test]
    fn test_par_multiply_dimension_mismatch() {
        let a: SparseMatrix = SparseMatrix::new(2, 3);
        let err = par_multiply(&a, &a).unwrap_err();
        assert!(matches!(
            err.matrix_error(),
            Some(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_par_multiply_overflow() {
        let mut a: SparseMatrix<i8> = SparseMatrix::new(1, 1);
        a.set_element(0, 0, 64);
        let err = par_multiply(&a, &a).unwrap_err();
        assert_eq!(
            err.matrix_error(),
            Some(&MatrixError::Overflow { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_par_multiply_term_order() {
        let a: SparseMatrix<i8> = "rows=2\ncols=3\n(0, 0, 1)\n(0, 1, 1)\n(0, 2, 1)\n(1, 0, 1)"
            .parse()
            .unwrap();
        let columns: [[i8; 3]; 3] = [[100, 100, -100], [100, -100, 100], [-100, 100, 100]];

        for column in columns {
            let mut b: SparseMatrix<i8> = SparseMatrix::new(3, 1);
            for (k, &value) in column.iter().enumerate() {
                b.set_element(k, 0, value);
            }
            let sequential = a.multiply(&b).unwrap();
            assert_eq!(sequential.get_element(0, 0), 100);
            assert_eq!(par_multiply(&a, &b).unwrap(), sequential);
        }

        // Both rows overflow; both paths report the first one
        let mut b: SparseMatrix<i8> = SparseMatrix::new(3, 1);
        b.set_element(0, 0, 100);
        b.set_element(1, 0, 100);
        let mut a2 = a.clone();
        a2.set_element(1, 0, 2);
        let expected = MatrixError::Overflow { row: 0, col: 0 };
        assert_eq!(a2.multiply(&b), Err(expected.clone()));
        let err = par_multiply(&a2, &b).unwrap_err();
        assert_eq!(err.matrix_error(), Some(&expected));
    }

    #[test]
    fn test_compute_dispatch() {
        let a: SparseMatrix = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)".parse().unwrap();
        let b: SparseMatrix = "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)".parse().unwrap();
        let sequential = ComputeConfig::default();
        let parallel = ComputeConfig::default()
            .with_parallel(true)
            .with_threads(Some(2));

        assert_eq!(
            compute(&a, &b, Operation::Add, &sequential).unwrap(),
            a.add(&b).unwrap()
        );
        assert_eq!(
            compute(&a, &b, Operation::Subtract, &sequential).unwrap(),
            a.subtract(&b).unwrap()
        );
        for config in [&sequential, &parallel] {
            assert_eq!(
                compute(&a, &b, Operation::Multiply, config).unwrap(),
                a.multiply(&b).unwrap()
            );
        }
    }
}
