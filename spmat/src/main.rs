//! spmat - Sparse matrix arithmetic over a line-oriented COO text format
//!
//! The shell is a pure command dispatcher: it loads two operand files,
//! invokes one arithmetic operation from the core, and writes the result
//! back in the same text format. All validation and arithmetic lives in
//! `spmat-core`; this binary only owns paths and I/O.

mod files;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use spmat_core::{Error, SparseMatrix};

use files::{load_matrix, save_matrix};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "Add, subtract, or multiply sparse integer matrices stored as COO text files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices and write the result
    Add {
        /// Left operand matrix file
        lhs: PathBuf,
        /// Right operand matrix file
        rhs: PathBuf,
        /// Destination path (`.txt` appended when missing)
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Subtract the second matrix from the first
    Sub {
        /// Left operand matrix file
        lhs: PathBuf,
        /// Right operand matrix file
        rhs: PathBuf,
        /// Destination path (`.txt` appended when missing)
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Multiply two matrices
    Mul {
        /// Left operand matrix file
        lhs: PathBuf,
        /// Right operand matrix file
        rhs: PathBuf,
        /// Destination path (`.txt` appended when missing)
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Show dimensions and non-zero count of a matrix file
    Info {
        /// Matrix file to inspect
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Add { lhs, rhs, output } => {
            run_operation("addition", lhs, rhs, output, SparseMatrix::add)
        }
        Commands::Sub { lhs, rhs, output } => {
            run_operation("subtraction", lhs, rhs, output, SparseMatrix::subtract)
        }
        Commands::Mul { lhs, rhs, output } => {
            run_operation("multiplication", lhs, rhs, output, SparseMatrix::multiply)
        }
        Commands::Info { path } => {
            let matrix = load_matrix(path)?;
            println!(
                "{}: {}x{} matrix, {} non-zeros",
                path.display(),
                matrix.rows(),
                matrix.cols(),
                matrix.nnz()
            );
            Ok(())
        }
    }
}

/// Load both operands, apply one core operation, and persist the result
fn run_operation(
    name: &str,
    lhs: &PathBuf,
    rhs: &PathBuf,
    output: &PathBuf,
    op: fn(&SparseMatrix, &SparseMatrix) -> spmat_core::Result<SparseMatrix>,
) -> Result<()> {
    let a = load_matrix(lhs)?;
    let b = load_matrix(rhs)?;
    let result = op(&a, &b).map_err(|err| anyhow!(describe(&err)))?;
    let written = save_matrix(&result, output)?;
    println!("Matrix {name} completed, result written to {}", written.display());
    Ok(())
}

/// User-facing message per error kind
///
/// The core reports a closed set of kinds, so the shell dispatches on
/// the kind rather than inspecting message text.
fn describe(err: &Error) -> String {
    match err {
        Error::MalformedHeader { .. } | Error::MalformedEntry { .. } => {
            format!("input file is not a valid matrix: {err}")
        }
        Error::IndexOutOfRange { .. } => {
            format!("entry position outside the declared dimensions: {err}")
        }
        Error::DimensionMismatch { op, .. } => {
            format!("the two matrices cannot be combined: {err}; choose operands whose shapes are compatible with {op}")
        }
        Error::ArithmeticOverflow { .. } => {
            format!("result value does not fit a 64-bit integer: {err}")
        }
    }
}
