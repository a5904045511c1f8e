//! Abstract interfaces for SPMX
//!
//! This module defines the trait abstractions shared by the core and the
//! `spmx` implementation crate.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixAccess, MatrixOperations};
