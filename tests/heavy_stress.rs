#![cfg(feature = "heavy")]
use nw_align::align;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

#[test]
fn heavy_stress_alignment_invariants() {
    let mut rng = StdRng::seed_from_u64(123);
    let x = random_dna(&mut rng, 2_000);
    let y = random_dna(&mut rng, 2_000);
    let alignment = align(&x, &y);

    assert_eq!(alignment.aligned_x.len(), alignment.aligned_y.len());
    assert_eq!(alignment.operations.len(), alignment.aligned_x.len());
    assert_eq!(alignment.stripped_x().as_bytes(), x.as_slice());
    assert_eq!(alignment.stripped_y().as_bytes(), y.as_slice());
    assert!(alignment.score <= 2_000);
}

#[test]
fn heavy_stress_skewed_lengths() {
    let mut rng = StdRng::seed_from_u64(7);
    let x = random_dna(&mut rng, 5_000);
    let y = random_dna(&mut rng, 100);
    let alignment = align(&x, &y);

    assert_eq!(alignment.stripped_x().as_bytes(), x.as_slice());
    assert_eq!(alignment.stripped_y().as_bytes(), y.as_slice());
    assert!(alignment.len() >= 5_000);
}
