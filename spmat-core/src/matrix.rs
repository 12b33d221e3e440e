//! Coordinate-list sparse matrix store and point access
//!
//! The element store keeps `(row, col, value)` triples sorted by row then
//! column, never stores a zero value, and never stores two triples with
//! the same position. Point reads and writes go through a binary search
//! so the ordering is maintained without re-sorting.

use crate::error::{Error, Result};

/// A single stored `(row, col, value)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// 0-based row index
    pub row: usize,
    /// 0-based column index
    pub col: usize,
    /// Non-zero stored value
    pub value: i64,
}

impl Entry {
    /// Create a new entry
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }

    /// Sort key for the store ordering
    pub(crate) const fn key(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// Sparse matrix of integers in coordinate-list (COO) form
///
/// Invariants, upheld after every operation:
/// 1. every entry lies in `[0, rows) x [0, cols)`;
/// 2. no entry has value zero (zeros are represented by absence);
/// 3. no two entries share a position;
/// 4. entries are sorted ascending by `(row, col)`.
///
/// Dimensions are fixed at construction. Arithmetic operations read their
/// operands immutably and build an independent result, so a failure
/// partway through a computation leaves both operands unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMatrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) elements: Vec<Entry>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    ///
    /// Fails with [`Error::MalformedHeader`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::MalformedHeader {
                reason: "matrix dimensions must be positive",
            });
        }
        Ok(Self {
            rows,
            cols,
            elements: Vec::new(),
        })
    }

    /// Build a matrix from parts already sorted by `(row, col)` with no
    /// duplicates and no zero values
    ///
    /// Used by the arithmetic operations, whose outputs are sorted by
    /// construction.
    pub(crate) fn from_sorted_parts(rows: usize, cols: usize, elements: Vec<Entry>) -> Self {
        debug_assert!(elements.windows(2).all(|w| w[0].key() < w[1].key()));
        debug_assert!(elements.iter().all(|e| e.value != 0));
        Self {
            rows,
            cols,
            elements,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of non-zero elements stored
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// Whether the matrix stores no non-zero elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The stored entries, sorted by `(row, col)`
    pub fn entries(&self) -> &[Entry] {
        &self.elements
    }

    /// Get the value at `(row, col)`
    ///
    /// Returns `0` for any in-bounds position that stores no entry.
    /// Fails with [`Error::IndexOutOfRange`] for out-of-bounds positions.
    pub fn get(&self, row: usize, col: usize) -> Result<i64> {
        self.check_bounds(row, col)?;
        Ok(match self.search(row, col) {
            Ok(idx) => self.elements[idx].value,
            Err(_) => 0,
        })
    }

    /// Set the value at `(row, col)`
    ///
    /// Setting a zero removes any stored entry at that position, so a
    /// subsequent [`get`](Self::get) returns `0`. Otherwise the entry is
    /// overwritten in place or inserted at its sorted position. Fails with
    /// [`Error::IndexOutOfRange`] for out-of-bounds positions.
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        self.check_bounds(row, col)?;
        match self.search(row, col) {
            Ok(idx) => {
                if value == 0 {
                    self.elements.remove(idx);
                } else {
                    self.elements[idx].value = value;
                }
            }
            Err(idx) => {
                if value != 0 {
                    self.elements.insert(idx, Entry::new(row, col, value));
                }
            }
        }
        Ok(())
    }

    /// Binary search for a position, returning the index of the matching
    /// entry or the insertion point that keeps the store sorted
    fn search(&self, row: usize, col: usize) -> std::result::Result<usize, usize> {
        self.elements.binary_search_by(|e| e.key().cmp(&(row, col)))
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfRange {
                row: row as i64,
                col: col as i64,
                normalized_col: col as i64,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}
