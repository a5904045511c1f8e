//! Text format for serialized matrices
//!
//! ```text
//! rows=<N>
//! cols=<M>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Blank lines after the header are skipped. Entry order carries no meaning.

pub mod constants;
pub mod entry;
pub mod header;

pub use entry::Entry;
pub use header::MatrixHeader;
