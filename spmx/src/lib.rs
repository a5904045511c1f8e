//! SPMX - Sparse Integer Matrix Files and Tools
//!
//! This library loads and saves sparse integer matrices in the `rows=`/`cols=`
//! text format, and runs their arithmetic sequentially or across a rayon
//! thread pool.
//!
//! ## Architecture
//!
//! - **spmx-core**: matrix type, arithmetic, text grammar and validation (no I/O)
//! - **spmx**: file I/O, parallel multiplication, configuration, logging and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmx::{read_matrix, write_matrix};
//!
//! fn example() -> Result<(), spmx::SpmxError> {
//!     let a = read_matrix("a.txt")?;
//!     let b = read_matrix("b.txt")?;
//!     let product = a.multiply(&b)?;
//!     write_matrix("output.txt", &product)?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use spmx_core::{
    // Core traits
    MatrixAccess, MatrixElement, MatrixOperations,
    // Matrix and format definitions
    Entry, MatrixHeader, SparseMatrix,
    // Error handling
    ErrorCategory, FormatError, FormatErrorKind, MatrixError, Operation,
};

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod parallel;

pub use config::ComputeConfig;
pub use error::{Result, SpmxError};
pub use io::{read_matrix, write_matrix, MatrixFile};
pub use parallel::{compute, par_multiply};
