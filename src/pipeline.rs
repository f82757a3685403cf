//! Staged alignment pipeline with compile-time ordering.
//!
//! The three processing steps are modeled as state-tagged values rather
//! than progress flags on a shared record: [`Initialized`] holds the
//! boundary-initialized matrix, [`Initialized::fill`] consumes it into a
//! [`Filled`] matrix, and [`Filled::reconstruct`] consumes that into the
//! final [`Alignment`]. Each stage takes ownership of its predecessor, so
//! a stage cannot be skipped, repeated, or reordered.
//!
//! ```
//! use nw_align::pipeline::Initialized;
//! use nw_align::Scores;
//!
//! let alignment = Initialized::new(b"AC", b"AC", Scores::default())
//!     .fill()
//!     .reconstruct();
//! assert_eq!(alignment.score, 2);
//! ```

use crate::alignment::{Alignment, DEFAULT_GAP_CHAR};
use crate::backtrack::reconstruct_with;
use crate::fill::fill;
use crate::matrix::{initialize, ScoreMatrix};
use crate::scoring::Scores;

/// An alignment run whose score matrix has its boundary gap ramp written.
pub struct Initialized<'a> {
    x: &'a [u8],
    y: &'a [u8],
    scores: Scores,
    gap_char: char,
    matrix: ScoreMatrix,
}

/// An alignment run whose score matrix is fully populated.
pub struct Filled<'a> {
    x: &'a [u8],
    y: &'a [u8],
    gap_char: char,
    matrix: ScoreMatrix,
}

impl<'a> Initialized<'a> {
    /// Start a run: allocate and boundary-initialize the matrix for `x`
    /// versus `y`.
    pub fn new(x: &'a [u8], y: &'a [u8], scores: Scores) -> Self {
        Self::with_gap_char(x, y, scores, DEFAULT_GAP_CHAR)
    }

    /// [`Initialized::new`] with an explicit gap character for the final
    /// aligned strings.
    pub fn with_gap_char(x: &'a [u8], y: &'a [u8], scores: Scores, gap_char: char) -> Self {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("initialize", x_len = x.len(), y_len = y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let matrix = initialize(x, y, &scores);
        Initialized {
            x,
            y,
            scores,
            gap_char,
            matrix,
        }
    }

    /// The boundary-initialized matrix.
    pub fn matrix(&self) -> &ScoreMatrix {
        &self.matrix
    }

    /// Populate the interior cells, consuming this stage.
    pub fn fill(self) -> Filled<'a> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill", x_len = self.x.len(), y_len = self.y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let matrix = fill(self.matrix, self.x, self.y, &self.scores);
        Filled {
            x: self.x,
            y: self.y,
            gap_char: self.gap_char,
            matrix,
        }
    }
}

impl<'a> Filled<'a> {
    /// The fully populated matrix.
    pub fn matrix(&self) -> &ScoreMatrix {
        &self.matrix
    }

    /// Optimal global alignment score, cell `(m, n)`.
    pub fn score(&self) -> i32 {
        self.matrix.final_score()
    }

    /// Walk the matrix back from `(m, n)` and produce the alignment,
    /// consuming this stage.
    pub fn reconstruct(self) -> Alignment {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!(
            "reconstruct",
            x_len = self.x.len(),
            y_len = self.y.len(),
            score = self.score()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        // The matrix was built from these sequences, so the dimension
        // check cannot fail.
        reconstruct_with(&self.matrix, self.x, self.y, self.gap_char)
            .expect("stage-built matrix always fits its sequences")
    }
}
