#![cfg(feature = "heavy")]

use dp_kernels::{
    find_largest_zero_square,
    synth::{random_matrix, random_uppercase},
    BinaryMatrix, CharWeights, WeightedSubstringMatcher,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn heavy_zero_square_with_planted_block() {
    let mut rng = StdRng::seed_from_u64(7);
    let side = 2_000;
    // Sparse zeros keep random squares tiny; the planted block dominates.
    let noise = random_matrix(side, side, 0.3, &mut rng);
    let (top, left, size) = (1_234, 567, 300);
    let rows: Vec<Vec<u8>> = (0..side)
        .map(|r| {
            (0..side)
                .map(|c| {
                    let inside = (top..top + size).contains(&r) && (left..left + size).contains(&c);
                    if inside {
                        0
                    } else {
                        noise.get(r, c)
                    }
                })
                .collect()
        })
        .collect();
    let matrix = BinaryMatrix::from_rows(&rows).unwrap();
    let square = find_largest_zero_square(&matrix);
    assert!(square.size >= size, "planted block lost: {}", square.size);
    let (r0, c0) = square.anchor.unwrap();
    for r in r0..r0 + square.size {
        assert!(matrix.row(r)[c0..c0 + square.size].iter().all(|&v| v == 0));
    }
}

#[test]
fn heavy_all_zero_rectangle() {
    let square = find_largest_zero_square(&BinaryMatrix::zeros(3_000, 1_000));
    assert_eq!(square.size, 1_000);
    assert_eq!(square.anchor, Some((0, 0)));
}

#[test]
fn heavy_substring_with_planted_match() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut s = random_uppercase(800, &mut rng);
    let mut t = random_uppercase(700, &mut rng);
    let motif = random_uppercase(120, &mut rng);
    s[300..420].copy_from_slice(&motif);
    t[50..170].copy_from_slice(&motif);

    let matcher = WeightedSubstringMatcher::new(CharWeights::uniform(1.0), 10.0);
    let best = matcher.find_best_match(&s, &t);
    assert!(best.length >= 120);
    assert_eq!(best.mismatches, 0);
    assert_eq!(best.score, best.length as f64);
}
