//! Addition and subtraction as a sorted merge-join

use std::cmp::Ordering;

use super::check_shapes;
use crate::error::{Error, Result};
use crate::matrix::{Entry, SparseMatrix};

impl SparseMatrix {
    /// Add two matrices of identical dimensions
    ///
    /// Positions that cancel to zero are dropped from the result. Fails
    /// with [`Error::DimensionMismatch`] if the shapes differ and
    /// [`Error::ArithmeticOverflow`] if a sum exceeds `i64`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.merge(other, "addition", false)
    }

    /// Subtract another matrix of identical dimensions from this one
    ///
    /// Right-only entries appear negated in the result; positions that
    /// cancel to zero are dropped. Fails with
    /// [`Error::DimensionMismatch`] if the shapes differ and
    /// [`Error::ArithmeticOverflow`] on `i64` overflow.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.merge(other, "subtraction", true)
    }

    /// Merge-join over two sorted element stores
    ///
    /// Walks both stores with a cursor each, comparing leading
    /// `(row, col)` keys. The output is sorted by construction, so no
    /// re-sort is needed. O(nnz_lhs + nnz_rhs).
    fn merge(&self, other: &Self, op: &'static str, negate_rhs: bool) -> Result<Self> {
        check_shapes(
            op,
            self,
            other,
            self.rows == other.rows && self.cols == other.cols,
        )?;

        let lhs = self.entries();
        let rhs = other.entries();
        let mut out = Vec::with_capacity(lhs.len() + rhs.len());
        let mut i = 0;
        let mut j = 0;

        while i < lhs.len() && j < rhs.len() {
            let a = lhs[i];
            let b = rhs[j];
            match a.key().cmp(&b.key()) {
                Ordering::Less => {
                    out.push(a);
                    i += 1;
                }
                Ordering::Greater => {
                    out.push(signed(b, negate_rhs)?);
                    j += 1;
                }
                Ordering::Equal => {
                    let combined = if negate_rhs {
                        a.value.checked_sub(b.value)
                    } else {
                        a.value.checked_add(b.value)
                    }
                    .ok_or(Error::ArithmeticOverflow {
                        row: a.row,
                        col: a.col,
                    })?;
                    // Cancellation: a zero never enters the store
                    if combined != 0 {
                        out.push(Entry::new(a.row, a.col, combined));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        out.extend_from_slice(&lhs[i..]);
        for &entry in &rhs[j..] {
            out.push(signed(entry, negate_rhs)?);
        }

        Ok(SparseMatrix::from_sorted_parts(self.rows, self.cols, out))
    }
}

/// Negate a right-operand entry when subtracting
fn signed(entry: Entry, negate: bool) -> Result<Entry> {
    if !negate {
        return Ok(entry);
    }
    let value = entry.value.checked_neg().ok_or(Error::ArithmeticOverflow {
        row: entry.row,
        col: entry.col,
    })?;
    Ok(Entry::new(entry.row, entry.col, value))
}
