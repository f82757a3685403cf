//! Example: global alignment of the classic GATTACA/GCATGCU pair.
//!
//! Run with:
//! `cargo run --example align`

use nw_align::align;

fn main() {
    let alignment = align(b"GATTACA", b"GCATGCU");

    println!("Global alignment score: {}", alignment.score);
    println!("X': {}", alignment.aligned_x);
    println!("Y': {}", alignment.aligned_y);
    println!("op: {}", alignment.operations);
}
