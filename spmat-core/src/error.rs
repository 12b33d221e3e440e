//! Error types for sparse matrix operations

use thiserror::Error;

/// Result type for sparse matrix operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during matrix construction, access, arithmetic,
/// or text decoding
///
/// Every operation in the core reports failure through one of these kinds
/// and leaves its operands untouched. Callers can branch on the kind
/// directly instead of inspecting messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Missing or unparseable `rows=`/`cols=` line, or a non-positive
    /// dimension
    #[error("malformed header: {reason}")]
    MalformedHeader {
        /// What the header was expected to contain
        reason: &'static str,
    },

    /// A data line that does not match the `(<int>, <int>, <int>)` grammar
    #[error("malformed entry on line {line}: `{text}`")]
    MalformedEntry {
        /// 1-based line number in the input text
        line: usize,
        /// The offending line with interior whitespace removed
        text: String,
    },

    /// A position outside `[0, rows) x [0, cols)` after column
    /// normalization
    #[error(
        "index ({row}, {col}) out of range for {rows}x{cols} matrix \
         (column normalized to {normalized_col})"
    )]
    IndexOutOfRange {
        /// Row index as supplied
        row: i64,
        /// Column index as supplied, before normalization
        col: i64,
        /// Column index after the `col == cols` sentinel adjustment
        normalized_col: i64,
        /// Matrix row count
        rows: usize,
        /// Matrix column count
        cols: usize,
    },

    /// Operand shapes incompatible with the requested operation
    #[error(
        "dimension mismatch for {op}: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}"
    )]
    DimensionMismatch {
        /// The operation that rejected the shapes
        op: &'static str,
        /// Left operand row count
        lhs_rows: usize,
        /// Left operand column count
        lhs_cols: usize,
        /// Right operand row count
        rhs_rows: usize,
        /// Right operand column count
        rhs_cols: usize,
    },

    /// A fixed-width integer computation overflowed `i64`
    #[error("arithmetic overflow at ({row}, {col})")]
    ArithmeticOverflow {
        /// Row of the entry being computed
        row: usize,
        /// Column of the entry being computed
        col: usize,
    },
}
