//! Line-oriented text codec for the COO matrix format
//!
//! The format is two header lines followed by one parenthesized triple
//! per non-zero entry:
//!
//! ```text
//! rows=<positive integer>
//! cols=<positive integer>
//! (<row>, <col>, <value>)
//! ```
//!
//! Blank lines are ignored and whitespace inside the parentheses is
//! insignificant. One quirk of the format is inherited deliberately: a
//! column index exactly equal to `cols` names the last column and is
//! normalized to `cols - 1`; every other column index is taken as
//! 0-based and used unchanged.

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::matrix::{Entry, SparseMatrix};

const ROWS_HEADER: &str = "expected `rows=<positive integer>` as the first line";
const COLS_HEADER: &str = "expected `cols=<positive integer>` as the second line";

impl SparseMatrix {
    /// Decode a matrix from its textual representation
    ///
    /// Fails with [`Error::MalformedHeader`] on missing or unparseable
    /// header lines, [`Error::MalformedEntry`] on a data line that does
    /// not match the triple grammar, and [`Error::IndexOutOfRange`] on an
    /// entry whose normalized position falls outside the matrix. A failed
    /// decode never yields a partially populated matrix.
    ///
    /// Zero-valued input lines are filtered so the no-stored-zero
    /// invariant holds for decoded matrices too. Duplicate positions are
    /// resolved last-occurrence-wins.
    pub fn decode(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty());

        let rows = parse_dimension(lines.next(), "rows", ROWS_HEADER)?;
        let cols = parse_dimension(lines.next(), "cols", COLS_HEADER)?;
        let mut matrix = Self::new(rows, cols)?;

        let mut intake = Vec::new();
        for (index, line) in lines {
            let (row, col, value) = parse_triple(line, index + 1)?;

            // Column sentinel: a value of exactly `cols` names the last column
            let normalized_col = if col == cols as i64 { col - 1 } else { col };
            let in_range = (0..rows as i64).contains(&row)
                && (0..cols as i64).contains(&normalized_col);
            if !in_range {
                return Err(Error::IndexOutOfRange {
                    row,
                    col,
                    normalized_col,
                    rows,
                    cols,
                });
            }
            if value == 0 {
                continue;
            }
            intake.push(Entry::new(row as usize, normalized_col as usize, value));
        }

        // Stable sort keeps input order within equal keys, so collapsing
        // runs below implements last-occurrence-wins for duplicates
        intake.sort_by_key(Entry::key);
        for entry in intake {
            match matrix.elements.last_mut() {
                Some(last) if last.key() == entry.key() => *last = entry,
                _ => matrix.elements.push(entry),
            }
        }

        Ok(matrix)
    }

    /// Encode the matrix to its textual representation
    ///
    /// Emits the two header lines and then one triple per stored entry in
    /// sorted order. Decoding the output reproduces an element-for-element
    /// identical matrix.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "rows={}", self.rows);
        let _ = writeln!(out, "cols={}", self.cols);
        for entry in &self.elements {
            let _ = writeln!(out, "({}, {}, {})", entry.row, entry.col, entry.value);
        }
        out
    }
}

/// Parse one `rows=<n>` / `cols=<n>` header line
fn parse_dimension(
    line: Option<(usize, &str)>,
    key: &str,
    reason: &'static str,
) -> Result<usize> {
    let (_, line) = line.ok_or(Error::MalformedHeader { reason })?;
    let (name, value) = line
        .split_once('=')
        .ok_or(Error::MalformedHeader { reason })?;
    if name.trim() != key {
        return Err(Error::MalformedHeader { reason });
    }
    let dimension: usize = value
        .trim()
        .parse()
        .map_err(|_| Error::MalformedHeader { reason })?;
    if dimension == 0 {
        return Err(Error::MalformedHeader {
            reason: "matrix dimensions must be positive",
        });
    }
    Ok(dimension)
}

/// Parse one `(<int>, <int>, <int>)` data line
///
/// All interior whitespace is removed before matching, so
/// `( 1 , 2 , 3 )` and `(1,2,3)` are equivalent.
fn parse_triple(line: &str, line_number: usize) -> Result<(i64, i64, i64)> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let malformed = || Error::MalformedEntry {
        line: line_number,
        text: compact.clone(),
    };

    let inner = compact
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(&malformed)?;
    let mut fields = inner.split(',');
    let mut next_int = || -> Result<i64> {
        fields
            .next()
            .and_then(|field| field.parse().ok())
            .ok_or_else(&malformed)
    };
    let row = next_int()?;
    let col = next_int()?;
    let value = next_int()?;
    if fields.next().is_some() {
        return Err(malformed());
    }
    Ok((row, col, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic() {
        let m = SparseMatrix::decode("rows=3\ncols=4\n(0, 1, 5)\n(2, 3, -7)\n").unwrap();
        assert_eq!(m.dimensions(), (3, 4));
        assert_eq!(m.entries(), &[Entry::new(0, 1, 5), Entry::new(2, 3, -7)]);
    }

    #[test]
    fn test_decode_sorts_entries() {
        let m = SparseMatrix::decode("rows=3\ncols=3\n(2,0,1)\n(0,2,2)\n(0,1,3)\n").unwrap();
        let keys: Vec<_> = m.entries().iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec![(0, 1), (0, 2), (2, 0)]);
    }

    #[test]
    fn test_decode_ignores_blank_lines_and_whitespace() {
        let m = SparseMatrix::decode("\n  rows=2 \n\ncols=2\n\n( 1 , 1 , 9 )\n\n").unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 9);
    }

    #[test]
    fn test_decode_normalizes_sentinel_column() {
        // A column equal to `cols` names the last valid column
        let m = SparseMatrix::decode("rows=2\ncols=4\n(0, 4, 5)\n").unwrap();
        assert_eq!(m.entries(), &[Entry::new(0, 3, 5)]);
    }

    #[test]
    fn test_decode_filters_zero_values() {
        let m = SparseMatrix::decode("rows=2\ncols=2\n(0, 0, 0)\n(1, 1, 3)\n").unwrap();
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.get(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_decode_duplicate_keys_last_wins() {
        let m = SparseMatrix::decode("rows=2\ncols=2\n(0, 0, 1)\n(1, 0, 4)\n(0, 0, 2)\n")
            .unwrap();
        assert_eq!(m.entries(), &[Entry::new(0, 0, 2), Entry::new(1, 0, 4)]);
    }

    #[test]
    fn test_decode_malformed_header() {
        for text in [
            "",
            "rows=2",
            "rows=two\ncols=2",
            "cols=2\nrows=2",
            "rows=0\ncols=2",
            "rows=2\ncols=-3",
            "rows 2\ncols 3",
        ] {
            assert!(
                matches!(
                    SparseMatrix::decode(text),
                    Err(Error::MalformedHeader { .. })
                ),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn test_decode_malformed_entry() {
        for text in [
            "rows=2\ncols=2\n0, 0, 1",
            "rows=2\ncols=2\n(0, 0)",
            "rows=2\ncols=2\n(0, 0, 1, 2)",
            "rows=2\ncols=2\n(0, 0, x)",
            "rows=2\ncols=2\n(0, 0, 1.5)",
        ] {
            assert!(
                matches!(
                    SparseMatrix::decode(text),
                    Err(Error::MalformedEntry { .. })
                ),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn test_decode_malformed_entry_names_line() {
        let err = SparseMatrix::decode("rows=2\ncols=2\n(0, 0, 1)\nbogus\n").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedEntry {
                line: 4,
                text: "bogus".to_string()
            }
        );
    }

    #[test]
    fn test_decode_out_of_range_reports_raw_and_normalized() {
        let err = SparseMatrix::decode("rows=2\ncols=3\n(0, 5, 1)\n").unwrap_err();
        assert_eq!(
            err,
            Error::IndexOutOfRange {
                row: 0,
                col: 5,
                normalized_col: 5,
                rows: 2,
                cols: 3,
            }
        );
        // Negative indices are out of range, not malformed
        assert!(matches!(
            SparseMatrix::decode("rows=2\ncols=3\n(-1, 0, 1)\n"),
            Err(Error::IndexOutOfRange { row: -1, .. })
        ));
    }

    #[test]
    fn test_encode_round_trip() {
        let text = "rows=3\ncols=3\n(0, 2, 4)\n(1, 0, -6)\n(2, 2, 1)\n";
        let m = SparseMatrix::decode(text).unwrap();
        assert_eq!(m.encode(), text);
        assert_eq!(SparseMatrix::decode(&m.encode()).unwrap(), m);
    }

    #[test]
    fn test_encode_empty_matrix() {
        let m = SparseMatrix::new(2, 5).unwrap();
        assert_eq!(m.encode(), "rows=2\ncols=5\n");
    }
}
