//! Interior population of the score matrix (the DP recurrence).
//!
//! Cells are swept row-major; each cell depends only on its top, left and
//! top-left neighbors, so the sweep order satisfies the data dependency.
//! On a symbol match the cell always extends the diagonal. Otherwise the
//! best raw neighbor is found and the tie-break follows a fixed priority:
//! left, then top, then top-left. A diagonal that merely ties a gap move
//! therefore still takes the gap penalty, not the mismatch score. This
//! order is load-bearing: a diagonal-first tie-break would produce an
//! equally optimal but textually different alignment.

use crate::matrix::ScoreMatrix;
use crate::scoring::Scores;

/// Populate every interior cell of the matrix for `x` versus `y`.
///
/// The boundary gap ramp is (re)written before the sweep, so a matrix that
/// skipped [`initialize`](crate::matrix::initialize) still fills correctly;
/// a matrix of the wrong shape is discarded and reallocated from the
/// sequence lengths.
pub fn fill(matrix: ScoreMatrix, x: &[u8], y: &[u8], scores: &Scores) -> ScoreMatrix {
    let mut matrix = if matrix.check_dimensions(x.len(), y.len()).is_ok() {
        matrix
    } else {
        ScoreMatrix::zeroed(x.len(), y.len())
    };
    matrix.init_boundary(scores.gap_penalty);

    for i in 1..=x.len() {
        for j in 1..=y.len() {
            let top_left = matrix.get(i - 1, j - 1);
            let top = matrix.get(i - 1, j);
            let left = matrix.get(i, j - 1);

            let value = if x[i - 1] == y[j - 1] {
                top_left + scores.match_score
            } else {
                let best = top_left.max(top).max(left);
                // Tie-break order: left, then top, then top-left.
                if best == left || best == top {
                    best + scores.gap_penalty
                } else {
                    best + scores.mismatch_score
                }
            };
            matrix.set(i, j, value);
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::initialize;

    fn filled(x: &[u8], y: &[u8], scores: &Scores) -> ScoreMatrix {
        fill(initialize(x, y, scores), x, y, scores)
    }

    #[test]
    fn identical_pair_full_matrix() {
        let m = filled(b"AC", b"AC", &Scores::default());
        assert_eq!(m.get(1, 1), 1);
        assert_eq!(m.get(1, 2), 0);
        assert_eq!(m.get(2, 1), 0);
        assert_eq!(m.get(2, 2), 2);
        assert_eq!(m.final_score(), 2);
    }

    #[test]
    fn single_mismatch_scores_minus_one() {
        let m = filled(b"A", b"G", &Scores::default());
        assert_eq!(m.final_score(), -1);
    }

    #[test]
    fn classic_example_final_score() {
        let m = filled(b"GATTACA", b"GCATGCU", &Scores::default());
        assert_eq!(m.final_score(), 0);
    }

    #[test]
    fn tie_break_prefers_gap_over_tied_diagonal() {
        // With mismatch at -5, cell (1,1) has the diagonal strictly best
        // and takes the mismatch score; cell (2,2) ties left/top at 0 and
        // must take the gap penalty instead.
        let scores = Scores::new(1, -5, -1);
        let m = filled(b"AB", b"BA", &scores);
        assert_eq!(m.get(1, 1), -5);
        assert_eq!(m.get(1, 2), 0);
        assert_eq!(m.get(2, 1), 0);
        assert_eq!(m.get(2, 2), -1);
    }

    #[test]
    fn empty_side_degenerates_to_gap_ramp() {
        let m = filled(b"", b"ACGT", &Scores::default());
        assert_eq!(m.rows(), 1);
        assert_eq!(m.final_score(), -4);

        let m = filled(b"ACGT", b"", &Scores::default());
        assert_eq!(m.cols(), 1);
        assert_eq!(m.final_score(), -4);
    }

    #[test]
    fn uninitialized_matrix_is_repaired() {
        let x = b"GATTACA";
        let y = b"GCATGCU";
        let scores = Scores::default();
        let from_zeroed = fill(ScoreMatrix::zeroed(x.len(), y.len()), x, y, &scores);
        let from_initialized = filled(x, y, &scores);
        assert_eq!(from_zeroed, from_initialized);
    }

    #[test]
    fn wrong_shape_matrix_is_rebuilt() {
        let x = b"GATTACA";
        let y = b"GCATGCU";
        let scores = Scores::default();
        let m = fill(ScoreMatrix::zeroed(1, 1), x, y, &scores);
        assert_eq!(m.rows(), x.len() + 1);
        assert_eq!(m.cols(), y.len() + 1);
        assert_eq!(m.final_score(), 0);
    }
}
