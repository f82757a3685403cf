//! Error type for matrix/sequence mismatches.
//!
//! The alignment algorithm itself is total over finite sequences, so the
//! only failure mode is handing a stage a score matrix whose dimensions do
//! not fit the sequences it is asked to reconstruct against.

use thiserror::Error;

/// Errors reported by the alignment operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// The score matrix does not have `(x_len + 1)` rows and `(y_len + 1)`
    /// columns for the sequences it was paired with.
    #[error(
        "score matrix is {rows}x{cols} but sequences of length {x_len} and {y_len} \
         require a {expected_rows}x{expected_cols} matrix"
    )]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        x_len: usize,
        y_len: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}

impl AlignError {
    pub(crate) fn dimension_mismatch(rows: usize, cols: usize, x_len: usize, y_len: usize) -> Self {
        AlignError::DimensionMismatch {
            rows,
            cols,
            x_len,
            y_len,
            expected_rows: x_len + 1,
            expected_cols: y_len + 1,
        }
    }
}
