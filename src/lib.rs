//! Needleman-Wunsch global sequence alignment.
//!
//! This crate computes an optimal global alignment of two symbol sequences
//! and reconstructs one optimal alignment (the gap-padded strings plus a
//! per-column operation trace) from the score matrix.
//!
//! ## Core idea
//! 1. [`initialize`](matrix::initialize) allocates the `(m+1) x (n+1)`
//!    score matrix and writes the boundary gap ramp.
//! 2. [`fill`](fill::fill) populates the interior with the dynamic
//!    programming recurrence.
//! 3. [`reconstruct`](backtrack::reconstruct) walks the matrix back from
//!    `(m, n)` and emits the aligned strings and trace.
//!
//! The three steps are composable on their own, as a state-tagged
//! [`pipeline`] that enforces their order at compile time, or through the
//! [`align`] / [`Aligner`] front end.
//!
//! Ties are broken deterministically: during the fill, gap moves (left,
//! then top) win over a tied diagonal; during the backtrack the diagonal
//! wins, then left, then top. Two runs over the same inputs always produce
//! byte-identical output.
//!
//! ## Quick start
//! ```
//! use nw_align::align;
//!
//! let alignment = align(b"GATTACA", b"GCATGCU");
//! assert_eq!(alignment.score, 0);
//! assert_eq!(alignment.aligned_x.len(), alignment.aligned_y.len());
//! assert_eq!(alignment.stripped_x(), "GATTACA");
//! ```
//!
//! ## Trace alphabet
//! `*` marks a match, `|` a substitution, and `_` a gap in either
//! sequence. The gap character rendered into the aligned strings defaults
//! to `_` and is configurable via [`AlignerBuilder`].

pub mod aligner;
pub mod alignment;
pub mod backtrack;
pub mod builder;
pub mod error;
pub mod fill;
pub mod matrix;
pub mod pipeline;
pub mod scoring;

pub use crate::aligner::{align, align_with, Aligner};
pub use crate::alignment::{Alignment, Op, DEFAULT_GAP_CHAR};
pub use crate::backtrack::{reconstruct, reconstruct_with};
pub use crate::builder::AlignerBuilder;
pub use crate::error::AlignError;
pub use crate::fill::fill;
pub use crate::matrix::{initialize, ScoreMatrix};
pub use crate::scoring::Scores;
