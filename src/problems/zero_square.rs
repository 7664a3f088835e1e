//! Largest all-zero square in a binary matrix.
//!
//! Let `dp[r][c]` be the side of the largest all-zero square whose
//! bottom-right corner is `(r, c)`. Then
//!
//! ```text
//! dp[r][c] = 0                                              if m[r][c] == 1
//!          = 1                                              if r == 0 or c == 0
//!          = 1 + min(dp[r-1][c], dp[r][c-1], dp[r-1][c-1])  otherwise
//! ```
//!
//! A square extends only as far as its top, left and diagonal neighbours
//! allow. One row-major sweep fills the grid and tracks the first maximum;
//! the square is then copied out of the source matrix.

use std::fmt;

use crate::matrix::BinaryMatrix;
use crate::utils::min3;

/// The largest all-zero square of a matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareResult {
    /// Copy of the square block (0×0 when no zero cell exists).
    pub submatrix: BinaryMatrix,
    /// Side of the square.
    pub size: usize,
    /// `(top_row, left_col)` of the square; `None` iff `size == 0`.
    pub anchor: Option<(usize, usize)>,
}

impl SquareResult {
    /// Result for a matrix without any zero cell.
    pub fn empty() -> Self {
        Self {
            submatrix: BinaryMatrix::default(),
            size: 0,
            anchor: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn top_row(&self) -> Option<usize> {
        self.anchor.map(|(r, _)| r)
    }

    pub fn left_col(&self) -> Option<usize> {
        self.anchor.map(|(_, c)| c)
    }
}

impl fmt::Display for SquareResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor {
            None => f.write_str("No zero square found"),
            Some((row, col)) => write!(
                f,
                "Largest zero square: {s}x{s} at position ({row}, {col})",
                s = self.size
            ),
        }
    }
}

/// Scratch grid of square sides, one per cell.
struct DpGrid {
    cols: usize,
    sides: Vec<u32>,
}

impl DpGrid {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            sides: vec![0; rows * cols],
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> u32 {
        self.sides[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, side: u32) {
        self.sides[row * self.cols + col] = side;
    }
}

/// Find the largest square sub-block of `matrix` made only of zeros.
///
/// Among squares of equal size, the one whose bottom-right corner comes
/// first in row-major order wins.
///
/// ```
/// use dp_kernels::{find_largest_zero_square, BinaryMatrix};
///
/// let m = BinaryMatrix::parse("1 0 0; 0 0 0; 0 0 1").unwrap();
/// let square = find_largest_zero_square(&m);
/// assert_eq!(square.size, 2);
/// assert_eq!(square.anchor, Some((0, 1)));
/// ```
pub fn find_largest_zero_square(matrix: &BinaryMatrix) -> SquareResult {
    let rows = matrix.rows();
    let cols = matrix.cols();
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("find_largest_zero_square", rows, cols);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut dp = DpGrid::new(rows, cols);
    let mut best_side = 0u32;
    let mut best_end = (0usize, 0usize);

    for (row, cells) in matrix.iter_rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell != 0 {
                continue;
            }
            let side = if row == 0 || col == 0 {
                1
            } else {
                1 + min3(
                    dp.get(row - 1, col),
                    dp.get(row, col - 1),
                    dp.get(row - 1, col - 1),
                )
            };
            dp.set(row, col, side);
            if side > best_side {
                best_side = side;
                best_end = (row, col);
            }
        }
    }

    let result = extract_square(matrix, best_side as usize, best_end);
    #[cfg(feature = "tracing")]
    tracing::debug!(size = result.size, anchor = ?result.anchor, "zero square found");
    result
}

fn extract_square(matrix: &BinaryMatrix, size: usize, end: (usize, usize)) -> SquareResult {
    if size == 0 {
        return SquareResult::empty();
    }
    let top = end.0 + 1 - size;
    let left = end.1 + 1 - size;
    SquareResult {
        submatrix: matrix.square_block(top, left, size),
        size,
        anchor: Some((top, left)),
    }
}
