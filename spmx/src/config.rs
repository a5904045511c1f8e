//! Configuration for computing and saving results

use std::path::PathBuf;

/// Default result file, as written by the interactive mode
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Options for a compute run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeConfig {
    /// Where the result matrix is written
    pub output: PathBuf,
    /// Multiply with one task per result row
    pub parallel: bool,
    /// Worker threads for parallel multiply; `None` uses rayon's default
    pub threads: Option<usize>,
    /// Reject inputs holding coordinates outside their declared shape
    pub strict: bool,
}

impl ComputeConfig {
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            parallel: false,
            threads: None,
            strict: false,
        }
    }
}
