//! Error type for file-backed SPMX operations

use std::path::PathBuf;

use spmx_core::MatrixError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpmxError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: MatrixError,
    },

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl SpmxError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SpmxError::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying matrix error, if this is one
    pub fn matrix_error(&self) -> Option<&MatrixError> {
        match self {
            SpmxError::InFile { source, .. } | SpmxError::Matrix(source) => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpmxError>;
