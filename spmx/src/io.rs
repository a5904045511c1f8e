//! File I/O for matrix text files
//!
//! This module reads and writes sparse matrices to/from files in the
//! `rows=`/`cols=` text format.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use spmx_core::{MatrixElement, MatrixError, MatrixHeader, SparseMatrix};
use tracing::debug;

use crate::error::{Result, SpmxError};

/// File handle for matrix text files
#[derive(Debug, Clone)]
pub struct MatrixFile {
    pub header: MatrixHeader,
    pub path: PathBuf,
}

impl MatrixFile {
    /// Open an existing matrix file, reading and validating only its header
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SpmxError::io(path, e))?;

        let mut head = Vec::with_capacity(2);
        for line in BufReader::new(file).lines().take(2) {
            head.push(line.map_err(|e| SpmxError::io(path, e))?);
        }

        let header = MatrixHeader::parse(&mut head.iter().map(String::as_str))
            .map_err(|e| in_file(path, e.into()))?;

        Ok(Self {
            header,
            path: path.to_path_buf(),
        })
    }

    /// Load the whole matrix
    pub fn read<T: MatrixElement>(&self) -> Result<SparseMatrix<T>> {
        let start = Instant::now();
        let source = fs::read_to_string(&self.path)
            .map_err(|e| SpmxError::io(&self.path, e))?;
        let matrix = SparseMatrix::<T>::from_text(&source)
            .map_err(|e| in_file(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            nrows = matrix.nrows(),
            ncols = matrix.ncols(),
            nnz = matrix.nnz(),
            elapsed = ?start.elapsed(),
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Write a matrix to `path`, replacing any existing file
    pub fn write<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        matrix: &SparseMatrix<T>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| SpmxError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        write!(writer, "{matrix}")
            .and_then(|_| writer.flush())
            .map_err(|e| SpmxError::io(path, e))?;

        debug!(
            path = %path.display(),
            nrows = matrix.nrows(),
            ncols = matrix.ncols(),
            nnz = matrix.nnz(),
            "wrote matrix"
        );
        Ok(Self {
            header: matrix.header(),
            path: path.to_path_buf(),
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.header.dimensions()
    }
}

fn in_file(path: &Path, source: MatrixError) -> SpmxError {
    SpmxError::InFile {
        path: path.to_path_buf(),
        source,
    }
}

/// Load an `i64` matrix from a text file
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    MatrixFile::open(path)?.read()
}

/// Save a matrix to a text file
pub fn write_matrix<T: MatrixElement, P: AsRef<Path>>(
    path: P,
    matrix: &SparseMatrix<T>,
) -> Result<()> {
    MatrixFile::write(path, matrix).map(|_| ())
}
