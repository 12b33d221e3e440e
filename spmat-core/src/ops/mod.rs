//! Arithmetic over sorted coordinate lists
//!
//! Addition and subtraction walk both sorted element stores with a
//! merge-join; multiplication pre-groups the right operand by row and
//! probes that grouping for each left element (a row-indexed hash-join).
//! Every operation builds a brand-new matrix and fails fast on shape or
//! overflow problems, leaving its operands untouched.

mod merge;
mod multiply;

use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

/// Shape precondition shared by the binary operations
fn check_shapes(
    op: &'static str,
    lhs: &SparseMatrix,
    rhs: &SparseMatrix,
    compatible: bool,
) -> Result<()> {
    if compatible {
        return Ok(());
    }
    Err(Error::DimensionMismatch {
        op,
        lhs_rows: lhs.rows,
        lhs_cols: lhs.cols,
        rhs_rows: rhs.rows,
        rhs_cols: rhs.cols,
    })
}
