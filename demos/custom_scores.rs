//! Example: custom scoring parameters and gap character.
//!
//! Run with:
//! `cargo run --example custom_scores`

use nw_align::{AlignerBuilder, Scores};

fn main() {
    // Reward matches heavily and make gaps expensive, so the aligner
    // prefers substitutions over insertions.
    let aligner = AlignerBuilder::new()
        .with_scores(Scores::new(2, -1, -3))
        .with_gap_char('-')
        .build();

    let alignment = aligner.align(b"ACCGTGA", b"ACGGA");

    println!("score: {}", alignment.score);
    println!("X': {}", alignment.aligned_x);
    println!("Y': {}", alignment.aligned_y);
    println!("op: {}", alignment.operations);
}
