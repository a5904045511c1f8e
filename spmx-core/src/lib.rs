#![no_std]

//! SPMX Core - Sparse Integer Matrix Definitions
//!
//! This crate provides the coordinate-keyed sparse matrix type, its
//! arithmetic, and the `rows=`/`cols=` text format. It performs no I/O;
//! file handling lives in the `spmx` crate.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod format;
pub mod matrix;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{Entry, MatrixHeader};
pub use matrix::SparseMatrix;
pub use traits::*;
