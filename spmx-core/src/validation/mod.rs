//! Validation utilities for SPMX
//!
//! Pure functions for token parsing and shape checks, with no I/O.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_index, check_product_shape, check_same_shape};
pub use parsing::{parse_header_value, parse_index, parse_value};
