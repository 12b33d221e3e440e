//! spmat-core - Sparse integer matrix arithmetic in coordinate-list form
//!
//! This crate stores matrices as sorted `(row, col, value)` triples and
//! implements addition, subtraction, and multiplication directly on the
//! sorted coordinate lists, without ever materializing a dense array.
//!
//! ## Architecture
//!
//! The workspace follows a clean core/shell separation:
//!
//! - **spmat-core**: element store, point access, arithmetic, and the
//!   text codec (no I/O)
//! - **spmat**: the command-line shell that owns file paths, reading,
//!   and writing
//!
//! ## Quick Start
//!
//! ```rust
//! use spmat_core::SparseMatrix;
//!
//! fn example() -> spmat_core::Result<()> {
//!     let a = SparseMatrix::decode("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n")?;
//!     let b = SparseMatrix::decode("rows=2\ncols=2\n(0, 0, -1)\n(0, 1, 3)\n")?;
//!
//!     // The (0, 0) pair cancels to zero and is dropped from the store
//!     let sum = a.add(&b)?;
//!     assert_eq!(sum.nnz(), 2);
//!     assert_eq!(sum.get(0, 1)?, 3);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod matrix;
pub mod ops;
pub mod text;

pub use error::{Error, Result};
pub use matrix::{Entry, SparseMatrix};
