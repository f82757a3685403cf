//! Reconstruction of the aligned strings from a populated score matrix.
//!
//! The walk starts at cell `(m, n)` and ends at `(0, 0)`, emitting exactly
//! one alignment column per step. Matching symbols always move diagonally.
//! Otherwise the best raw neighbor decides the move, tie-broken in the
//! fixed order top-left, then left, then top, so a tie can never emit two
//! columns in one step and the trace stays exactly as long as the aligned
//! strings. Emissions accumulate back-to-front and are reversed at the end.

use crate::alignment::{Alignment, Op, DEFAULT_GAP_CHAR};
use crate::error::AlignError;
use crate::matrix::ScoreMatrix;

/// Reconstruct the aligned strings and operation trace from a filled
/// matrix, using the default gap character.
///
/// Fails fast if the matrix dimensions do not fit the sequences.
pub fn reconstruct(matrix: &ScoreMatrix, x: &[u8], y: &[u8]) -> Result<Alignment, AlignError> {
    reconstruct_with(matrix, x, y, DEFAULT_GAP_CHAR)
}

/// [`reconstruct`] with an explicit gap character for the aligned strings.
///
/// The operation trace always uses the fixed [`Op`] alphabet regardless of
/// the gap character chosen here.
pub fn reconstruct_with(
    matrix: &ScoreMatrix,
    x: &[u8],
    y: &[u8],
    gap_char: char,
) -> Result<Alignment, AlignError> {
    matrix.check_dimensions(x.len(), y.len())?;

    let mut i = x.len();
    let mut j = y.len();
    let mut aligned_x = String::with_capacity(i + j);
    let mut aligned_y = String::with_capacity(i + j);
    let mut operations = String::with_capacity(i + j);

    while i > 0 || j > 0 {
        if i == 0 {
            // Only Y remains: gap ramp along the top row.
            aligned_x.push(gap_char);
            aligned_y.push(y[j - 1] as char);
            operations.push(Op::Gap.symbol());
            j -= 1;
            continue;
        }
        if j == 0 {
            // Only X remains: gap ramp along the left column.
            aligned_x.push(x[i - 1] as char);
            aligned_y.push(gap_char);
            operations.push(Op::Gap.symbol());
            i -= 1;
            continue;
        }
        if x[i - 1] == y[j - 1] {
            aligned_x.push(x[i - 1] as char);
            aligned_y.push(y[j - 1] as char);
            operations.push(Op::Match.symbol());
            i -= 1;
            j -= 1;
            continue;
        }

        let top_left = matrix.get(i - 1, j - 1);
        let top = matrix.get(i - 1, j);
        let left = matrix.get(i, j - 1);
        let best = top_left.max(top).max(left);

        if best == top_left {
            aligned_x.push(x[i - 1] as char);
            aligned_y.push(y[j - 1] as char);
            operations.push(Op::Substitution.symbol());
            i -= 1;
            j -= 1;
        } else if best == left {
            aligned_x.push(gap_char);
            aligned_y.push(y[j - 1] as char);
            operations.push(Op::Gap.symbol());
            j -= 1;
        } else {
            aligned_x.push(x[i - 1] as char);
            aligned_y.push(gap_char);
            operations.push(Op::Gap.symbol());
            i -= 1;
        }
    }

    Ok(Alignment {
        aligned_x: aligned_x.chars().rev().collect(),
        aligned_y: aligned_y.chars().rev().collect(),
        operations: operations.chars().rev().collect(),
        score: matrix.final_score(),
        gap_char,
    })
}
