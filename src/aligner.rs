//! Front-end aligner composing the three processing stages.

use crate::alignment::{Alignment, DEFAULT_GAP_CHAR};
use crate::pipeline::Initialized;
use crate::scoring::Scores;

/// Configured Needleman-Wunsch aligner.
///
/// An `Aligner` holds the scoring parameters and the gap character; each
/// [`align`](Aligner::align) call runs an independent initialize, fill and
/// reconstruct pass over its own matrix, so one aligner may be shared
/// freely across threads.
///
/// ```
/// use nw_align::{Aligner, Scores};
///
/// let aligner = Aligner::with_scores(Scores::new(2, -1, -2));
/// let alignment = aligner.align(b"ACGT", b"AGT");
/// assert_eq!(alignment.stripped_y(), "AGT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aligner {
    scores: Scores,
    gap_char: char,
}

impl Default for Aligner {
    fn default() -> Self {
        Aligner::new()
    }
}

impl Aligner {
    /// Aligner with default scoring and the default gap character.
    pub fn new() -> Self {
        Aligner {
            scores: Scores::default(),
            gap_char: DEFAULT_GAP_CHAR,
        }
    }

    /// Aligner with explicit scoring parameters.
    pub fn with_scores(scores: Scores) -> Self {
        Aligner {
            scores,
            gap_char: DEFAULT_GAP_CHAR,
        }
    }

    /// The configured scoring parameters.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// The configured gap character.
    pub fn gap_char(&self) -> char {
        self.gap_char
    }

    pub(crate) fn with_config(scores: Scores, gap_char: char) -> Self {
        Aligner { scores, gap_char }
    }

    /// Compute an optimal global alignment of `x` against `y`.
    pub fn align(&self, x: &[u8], y: &[u8]) -> Alignment {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("align", x_len = x.len(), y_len = y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        Initialized::with_gap_char(x, y, self.scores, self.gap_char)
            .fill()
            .reconstruct()
    }
}

/// Align `x` against `y` with default scoring.
pub fn align(x: &[u8], y: &[u8]) -> Alignment {
    Aligner::new().align(x, y)
}

/// Align `x` against `y` with explicit scoring parameters.
pub fn align_with(x: &[u8], y: &[u8], scores: Scores) -> Alignment {
    Aligner::with_scores(scores).align(x, y)
}
