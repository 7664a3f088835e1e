//! Synthetic inputs for benchmarks, stress tests and the report driver.
//!
//! Generators take the RNG from the caller, so a seeded
//! [`StdRng`](rand::rngs::StdRng) reproduces the same data run after run.

use rand::Rng;

use crate::matrix::BinaryMatrix;

/// Uppercase Latin alphabet.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `rows × cols` matrix whose cells are 0 with probability `zero_density`.
///
/// # Panics
/// Panics if `zero_density` is outside `[0, 1]`.
pub fn random_matrix<R: Rng>(
    rows: usize,
    cols: usize,
    zero_density: f64,
    rng: &mut R,
) -> BinaryMatrix {
    assert!(
        (0.0..=1.0).contains(&zero_density),
        "zero_density must lie in [0, 1]"
    );
    let cells = (0..rows * cols)
        .map(|_| u8::from(!rng.gen_bool(zero_density)))
        .collect();
    BinaryMatrix::from_binary_cells(rows, cols, cells)
}

/// `len` symbols drawn uniformly from `alphabet`.
///
/// # Panics
/// Panics if `alphabet` is empty and `len > 0`.
pub fn random_sequence<R: Rng>(len: usize, alphabet: &[u8], rng: &mut R) -> Vec<u8> {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// `len` uppercase letters drawn uniformly.
pub fn random_uppercase<R: Rng>(len: usize, rng: &mut R) -> Vec<u8> {
    random_sequence(len, UPPERCASE, rng)
}
