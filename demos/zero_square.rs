//! Example: largest all-zero square of a binary matrix.
//!
//! Run with:
//! `cargo run --example zero_square`

use dp_kernels::{find_largest_zero_square, BinaryMatrix, InputError};

fn main() -> Result<(), InputError> {
    let matrix = BinaryMatrix::from_rows(&[
        [1u8, 0, 1, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 1, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 1, 1, 0, 1],
    ])?;

    println!("Input matrix:\n{matrix}\n");

    let square = find_largest_zero_square(&matrix);
    println!("{square}");
    if !square.is_empty() {
        println!("Sub-matrix content:\n{}", square.submatrix);
    }

    // Ragged rows are rejected before the kernel ever runs.
    let ragged: [&[u8]; 2] = [&[0, 0], &[0]];
    if let Err(err) = BinaryMatrix::from_rows(&ragged) {
        println!("\nRejected input: {err}");
    }
    Ok(())
}
