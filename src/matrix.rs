//! The dynamic-programming score matrix and its boundary initialization.
//!
//! For sequences of length `m` and `n` the matrix has `(m + 1)` rows and
//! `(n + 1)` columns; cell `(i, j)` holds the optimal score for aligning
//! the length-`i` prefix of X against the length-`j` prefix of Y. Row 0 and
//! column 0 form the gap ramp: aligning a prefix against nothing costs one
//! gap penalty per consumed symbol.

use crate::error::AlignError;
use crate::scoring::Scores;

/// Score matrix owned by a single alignment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    cells: Vec<Vec<i32>>,
}

impl ScoreMatrix {
    /// Allocate a zeroed `(m + 1) x (n + 1)` matrix for sequence lengths
    /// `m` and `n`.
    pub fn zeroed(m: usize, n: usize) -> Self {
        ScoreMatrix {
            cells: vec![vec![0i32; n + 1]; m + 1],
        }
    }

    /// Number of rows, `m + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns, `n + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// Read cell `(i, j)`.
    ///
    /// # Panics
    /// Panics if the indices are out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.cells[i][j]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: i32) {
        self.cells[i][j] = value;
    }

    /// Optimal global alignment score of the full sequences, cell `(m, n)`.
    pub fn final_score(&self) -> i32 {
        self.cells[self.rows() - 1][self.cols() - 1]
    }

    /// Overwrite row 0 and column 0 with the gap ramp and reset cell
    /// `(0, 0)` to zero. Interior cells are left untouched.
    pub(crate) fn init_boundary(&mut self, gap_penalty: i32) {
        self.cells[0][0] = 0;
        for i in 1..self.rows() {
            self.cells[i][0] = self.cells[i - 1][0] + gap_penalty;
        }
        for j in 1..self.cols() {
            self.cells[0][j] = self.cells[0][j - 1] + gap_penalty;
        }
    }

    /// Verify that this matrix fits sequences of length `x_len` and `y_len`.
    pub fn check_dimensions(&self, x_len: usize, y_len: usize) -> Result<(), AlignError> {
        if self.rows() != x_len + 1 || self.cols() != y_len + 1 {
            return Err(AlignError::dimension_mismatch(
                self.rows(),
                self.cols(),
                x_len,
                y_len,
            ));
        }
        Ok(())
    }
}

/// Allocate and boundary-initialize the score matrix for `x` versus `y`.
///
/// Cell `(0, 0)` is zero; cell `(i, 0)` is `i * gap` and cell `(0, j)` is
/// `j * gap`. Interior cells stay zero until [`fill`](crate::fill::fill)
/// populates them.
pub fn initialize(x: &[u8], y: &[u8], scores: &Scores) -> ScoreMatrix {
    let mut matrix = ScoreMatrix::zeroed(x.len(), y.len());
    matrix.init_boundary(scores.gap_penalty);
    matrix
}
