//! Command line interface
//!
//! Without a subcommand the tool runs interactively: it prompts for two
//! matrix files and an operation, then writes the result file. The
//! `compute` and `info` subcommands are the scripted equivalents.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use spmx_core::{MatrixAccess, Operation, SparseMatrix};
use tracing::{info, warn};

use crate::config::{ComputeConfig, DEFAULT_OUTPUT};
use crate::io::{read_matrix, write_matrix};
use crate::parallel::compute;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "SPMX - add, subtract and multiply sparse integer matrix files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Result file for interactive mode and `compute`
    #[arg(
        short,
        long,
        global = true,
        env = "SPMX_OUTPUT",
        default_value = DEFAULT_OUTPUT
    )]
    pub output: PathBuf,

    /// Log at debug level unless SPMX_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Combine two matrix files and write the result
    Compute {
        /// Left operand matrix file
        left: PathBuf,

        /// Right operand matrix file
        right: PathBuf,

        /// Operation to apply
        #[arg(long, value_enum)]
        op: OperationArg,

        /// Multiply rows in parallel
        #[arg(long)]
        parallel: bool,

        /// Worker threads for --parallel
        #[arg(long, requires = "parallel")]
        threads: Option<usize>,

        /// Reject entries outside the declared shape
        #[arg(long)]
        strict: bool,
    },
    /// Show matrix file info
    Info {
        /// Matrix file
        path: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationArg {
    Add,
    Subtract,
    Multiply,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Add => Operation::Add,
            OperationArg::Subtract => Operation::Subtract,
            OperationArg::Multiply => Operation::Multiply,
        }
    }
}

/// Menu choice: 1 = add, 2 = subtract, 3 = multiply
pub fn parse_choice(input: &str) -> Option<Operation> {
    match input.trim().parse::<i64>().ok()? {
        1 => Some(Operation::Add),
        2 => Some(Operation::Subtract),
        3 => Some(Operation::Multiply),
        _ => None,
    }
}

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    InvalidChoice,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ComputeConfig::default().with_output(cli.output);

    match cli.command {
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_interactive(stdin.lock(), stdout.lock(), &config)?;
        }
        Some(Commands::Compute {
            left,
            right,
            op,
            parallel,
            threads,
            strict,
        }) => {
            let config = config
                .with_parallel(parallel)
                .with_threads(threads)
                .with_strict(strict);
            run_compute(&left, &right, op.into(), &config)?;
        }
        Some(Commands::Info { path, json }) => {
            let stdout = std::io::stdout();
            run_info(&path, json, stdout.lock())?;
        }
    }

    Ok(())
}

/// Prompt for two files and an operation, then write the result
///
/// An unrecognised choice is reported on `output` and nothing is written.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &ComputeConfig,
) -> anyhow::Result<Outcome> {
    let left_path = prompt(
        &mut input,
        &mut output,
        "Enter the path of the first matrix file: ",
    )?;
    let right_path = prompt(
        &mut input,
        &mut output,
        "Enter the path of the second matrix file: ",
    )?;

    let left = load(Path::new(&left_path), config)?;
    let right = load(Path::new(&right_path), config)?;

    writeln!(
        output,
        "Select operation: 1 for addition, 2 for subtraction, 3 for multiplication"
    )?;
    let choice = prompt(&mut input, &mut output, "Your choice: ")?;

    let Some(operation) = parse_choice(&choice) else {
        writeln!(output, "Invalid choice")?;
        return Ok(Outcome::InvalidChoice);
    };

    let result = compute(&left, &right, operation, config)?;
    save(&result, config)?;
    Ok(Outcome::Written(config.output.clone()))
}

/// Load both operands, apply `operation`, and write the result
pub fn run_compute(
    left: &Path,
    right: &Path,
    operation: Operation,
    config: &ComputeConfig,
) -> anyhow::Result<()> {
    let left = load(left, config)?;
    let right = load(right, config)?;
    let result = compute(&left, &right, operation, config)
        .with_context(|| format!("{operation} failed"))?;
    save(&result, config)
}

/// Summary printed by `info`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixInfo {
    pub path: PathBuf,
    pub nrows: usize,
    pub ncols: usize,
    pub nnz: usize,
    pub density: f64,
    pub in_bounds: bool,
}

impl MatrixInfo {
    pub fn new(path: &Path, matrix: &SparseMatrix) -> Self {
        Self {
            path: path.to_path_buf(),
            nrows: matrix.nrows(),
            ncols: matrix.ncols(),
            nnz: matrix.nnz(),
            density: matrix.density(),
            in_bounds: matrix.check_bounds().is_ok(),
        }
    }
}

pub fn run_info<W: Write>(
    path: &Path,
    json: bool,
    mut output: W,
) -> anyhow::Result<MatrixInfo> {
    let matrix = read_matrix(path)?;
    let info = MatrixInfo::new(path, &matrix);

    if json {
        write_json(&info, &mut output)?;
    } else {
        writeln!(output, "Matrix Info:")?;
        writeln!(output, "  Path: {}", info.path.display())?;
        writeln!(output, "  Dimensions: {} x {}", info.nrows, info.ncols)?;
        writeln!(output, "  Non-zero elements: {}", info.nnz)?;
        writeln!(output, "  Density: {:.6}", info.density)?;
        if !info.in_bounds {
            writeln!(output, "  Warning: entries outside declared shape")?;
        }
    }

    Ok(info)
}

#[cfg(feature = "serde")]
fn write_json<W: Write>(info: &MatrixInfo, output: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *output, info)?;
    writeln!(output)?;
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn write_json<W: Write>(_info: &MatrixInfo, _output: &mut W) -> anyhow::Result<()> {
    anyhow::bail!("JSON output requires the `serde` feature")
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> anyhow::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

fn load(path: &Path, config: &ComputeConfig) -> anyhow::Result<SparseMatrix> {
    let matrix = read_matrix(path)?;
    if config.strict {
        if let Err(e) = matrix.check_bounds() {
            warn!(path = %path.display(), "{e}");
            return Err(e)
                .with_context(|| format!("{} failed strict bounds check", path.display()));
        }
    }
    Ok(matrix)
}

fn save(result: &SparseMatrix, config: &ComputeConfig) -> anyhow::Result<()> {
    write_matrix(&config.output, result)?;
    info!(
        path = %config.output.display(),
        nrows = result.nrows(),
        ncols = result.ncols(),
        nnz = result.nnz(),
        "wrote result"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Some(Operation::Add));
        assert_eq!(parse_choice(" 2\n"), Some(Operation::Subtract));
        assert_eq!(parse_choice("3"), Some(Operation::Multiply));
        assert_eq!(parse_choice("4"), None);
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("add"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from([
            "spmx",
            "compute",
            "a.txt",
            "b.txt",
            "--op",
            "multiply",
            "--parallel",
            "--threads",
            "2",
            "-o",
            "out.txt",
        ])
        .unwrap();
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        match cli.command {
            Some(Commands::Compute {
                op,
                parallel,
                threads,
                strict,
                ..
            }) => {
                assert_eq!(op, OperationArg::Multiply);
                assert!(parallel);
                assert_eq!(threads, Some(2));
                assert!(!strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["spmx"]).unwrap();
        assert!(cli.command.is_none());

        let divide = ["spmx", "compute", "a", "b", "--op", "divide"];
        assert!(Cli::try_parse_from(divide).is_err());
        let add = ["spmx", "compute", "a", "b", "--op", "add"];
        assert!(Cli::try_parse_from(add).is_ok());
        let threads_without_parallel = [&add[..], &["--threads", "2"]].concat();
        assert!(Cli::try_parse_from(threads_without_parallel).is_err());
    }

    #[test]
    fn test_operation_arg() {
        assert_eq!(Operation::from(OperationArg::Add), Operation::Add);
        assert_eq!(Operation::from(OperationArg::Subtract), Operation::Subtract);
        assert_eq!(Operation::from(OperationArg::Multiply), Operation::Multiply);
    }
}
