use nw_align::pipeline::Initialized;
use nw_align::{align, fill, initialize, reconstruct, AlignError, ScoreMatrix, Scores};

#[test]
fn staged_run_equals_front_end() {
    let x = b"GATTACA";
    let y = b"GCATGCU";
    let staged = Initialized::new(x, y, Scores::default()).fill().reconstruct();
    assert_eq!(staged, align(x, y));
}

#[test]
fn free_functions_compose_like_the_pipeline() {
    let x = b"ACGT";
    let y = b"AGT";
    let scores = Scores::default();
    let matrix = fill(initialize(x, y, &scores), x, y, &scores);
    let composed = reconstruct(&matrix, x, y).unwrap();
    assert_eq!(composed, align(x, y));
}

#[test]
fn initialize_twice_is_byte_identical() {
    let scores = Scores::new(2, -2, -3);
    let first = initialize(b"GATTACA", b"GCATGCU", &scores);
    let second = initialize(b"GATTACA", b"GCATGCU", &scores);
    assert_eq!(first, second);
}

#[test]
fn fill_repairs_a_skipped_initialize() {
    let x = b"ACGT";
    let y = b"AGT";
    let scores = Scores::default();
    let skipped = fill(ScoreMatrix::zeroed(x.len(), y.len()), x, y, &scores);
    let proper = fill(initialize(x, y, &scores), x, y, &scores);
    assert_eq!(skipped, proper);
}

#[test]
fn reconstruct_rejects_foreign_matrix() {
    let scores = Scores::default();
    let matrix = fill(initialize(b"AC", b"AC", &scores), b"AC", b"AC", &scores);
    let err = reconstruct(&matrix, b"GATTACA", b"GCATGCU").unwrap_err();
    match err {
        AlignError::DimensionMismatch {
            rows,
            cols,
            expected_rows,
            expected_cols,
            ..
        } => {
            assert_eq!((rows, cols), (3, 3));
            assert_eq!((expected_rows, expected_cols), (8, 8));
        }
    }
}

#[test]
fn filled_stage_score_agrees_with_reconstruction() {
    let stage = Initialized::new(b"GATTACA", b"GCATGCU", Scores::default()).fill();
    let score = stage.score();
    let alignment = stage.reconstruct();
    assert_eq!(alignment.score, score);
}
