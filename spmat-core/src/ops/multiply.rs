//! Multiplication as a row-indexed hash-join

use hashbrown::HashMap;

use super::check_shapes;
use crate::error::{Error, Result};
use crate::matrix::{Entry, SparseMatrix};

impl SparseMatrix {
    /// Multiply two matrices
    ///
    /// Requires `self.cols == other.rows`, else
    /// [`Error::DimensionMismatch`]. The right operand is grouped by row
    /// once, then every left entry `(r, k, v)` probes group `k` and
    /// accumulates `v * w` into a `(r, c)` keyed map. Zero totals are
    /// dropped and the surviving entries sorted by `(row, col)`.
    /// Accumulation is checked `i64`; overflow fails with
    /// [`Error::ArithmeticOverflow`]. O(nnz_lhs * avg row fanout).
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        check_shapes("multiplication", self, other, self.cols == other.rows)?;

        // Group the right operand's entries by row for O(1) probing
        let mut rhs_rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for entry in other.entries() {
            rhs_rows
                .entry(entry.row)
                .or_default()
                .push((entry.col, entry.value));
        }

        let mut totals: HashMap<(usize, usize), i64> = HashMap::new();
        for entry in self.entries() {
            let Some(partners) = rhs_rows.get(&entry.col) else {
                continue;
            };
            for &(col, value) in partners {
                let product =
                    entry
                        .value
                        .checked_mul(value)
                        .ok_or(Error::ArithmeticOverflow {
                            row: entry.row,
                            col,
                        })?;
                let total = totals.entry((entry.row, col)).or_insert(0);
                *total = total
                    .checked_add(product)
                    .ok_or(Error::ArithmeticOverflow {
                        row: entry.row,
                        col,
                    })?;
            }
        }

        let mut out: Vec<Entry> = totals
            .into_iter()
            .filter(|&(_, value)| value != 0)
            .map(|((row, col), value)| Entry::new(row, col, value))
            .collect();
        out.sort_unstable_by_key(Entry::key);

        Ok(SparseMatrix::from_sorted_parts(self.rows, other.cols, out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: usize, cols: usize, entries: &[(usize, usize, i64)]) -> SparseMatrix {
        let mut m = SparseMatrix::new(rows, cols).unwrap();
        for &(r, c, v) in entries {
            m.set(r, c, v).unwrap();
        }
        m
    }

    #[test]
    fn test_multiply_2x3_by_3x2() {
        // Row 0 of the product: 1*5 (via col 0) + 2*4 (via col 2) = 13 at (0, 1)
        let a = matrix(2, 3, &[(0, 0, 1), (0, 2, 2)]);
        let b = matrix(3, 2, &[(0, 1, 5), (2, 1, 4)]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (2, 2));
        assert_eq!(product.entries(), &[Entry::new(0, 1, 13)]);
    }

    #[test]
    fn test_multiply_result_is_sorted() {
        let a = matrix(3, 3, &[(2, 0, 1), (0, 1, 1), (1, 2, 1)]);
        let b = matrix(3, 3, &[(0, 2, 3), (1, 0, 4), (2, 1, 5)]);
        let product = a.multiply(&b).unwrap();
        let keys: Vec<_> = product.entries().iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_multiply_drops_zero_totals() {
        // (0,0): 1*2 + 2*(-1) = 0, so the product stores nothing there
        let a = matrix(1, 2, &[(0, 0, 1), (0, 1, 2)]);
        let b = matrix(2, 1, &[(0, 0, 2), (1, 0, -1)]);
        let product = a.multiply(&b).unwrap();
        assert!(product.is_empty());
        assert_eq!(product.dimensions(), (1, 1));
    }

    #[test]
    fn test_multiply_by_identity() {
        let a = matrix(2, 2, &[(0, 1, 3), (1, 0, -7)]);
        let identity = matrix(2, 2, &[(0, 0, 1), (1, 1, 1)]);
        assert_eq!(a.multiply(&identity).unwrap(), a);
        assert_eq!(identity.multiply(&a).unwrap(), a);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = matrix(2, 3, &[]);
        let b = matrix(2, 3, &[]);
        assert!(matches!(
            a.multiply(&b),
            Err(Error::DimensionMismatch {
                op: "multiplication",
                ..
            })
        ));
    }

    #[test]
    fn test_multiply_overflow() {
        let a = matrix(1, 1, &[(0, 0, i64::MAX)]);
        let b = matrix(1, 1, &[(0, 0, 2)]);
        assert!(matches!(
            a.multiply(&b),
            Err(Error::ArithmeticOverflow { row: 0, col: 0 })
        ));
    }

    #[test]
    fn test_multiply_distributes_over_add() {
        let a = matrix(2, 3, &[(0, 0, 2), (1, 2, -3), (0, 1, 1)]);
        let b = matrix(3, 2, &[(0, 0, 1), (1, 1, 4), (2, 0, -2)]);
        let c = matrix(3, 2, &[(0, 1, 5), (2, 0, 2), (1, 1, -4)]);
        let lhs = a.multiply(&b.add(&c).unwrap()).unwrap();
        let rhs = a.multiply(&b).unwrap().add(&a.multiply(&c).unwrap()).unwrap();
        assert_eq!(lhs, rhs);
    }
}
