//! Validated binary matrices.
//!
//! [`BinaryMatrix`] is the input of the zero-square kernel. Construction
//! checks that every row has the same width and every cell is 0 or 1, so
//! the kernel itself can assume well-formed input.

use std::fmt;

use crate::error::InputError;

/// Rectangular grid of 0/1 cells, stored row-major.
///
/// Zero rows or zero columns are allowed; such a matrix simply has no zero
/// square.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl BinaryMatrix {
    /// Build from a list of rows.
    ///
    /// The width is taken from the first row; an empty list gives a 0×0 matrix.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, InputError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(InputError::RaggedRow {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Self::from_flat(rows.len(), cols, cells)
    }

    /// Build from a row-major cell buffer of exactly `rows * cols` cells.
    pub fn from_flat(rows: usize, cols: usize, cells: Vec<u8>) -> Result<Self, InputError> {
        let expected = rows * cols;
        if cells.len() != expected {
            return Err(InputError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        if let Some(idx) = cells.iter().position(|&v| v > 1) {
            return Err(InputError::NonBinaryCell {
                row: idx / cols,
                col: idx % cols,
                value: cells[idx],
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Parse whitespace-separated cells, one row per line or `;`-separated group.
    ///
    /// Blank rows are skipped.
    /// ```
    /// use dp_kernels::BinaryMatrix;
    ///
    /// let m = BinaryMatrix::parse("1 0 1; 0 0 0").unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// assert_eq!(m.get(1, 2), 0);
    /// ```
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut rows = Vec::new();
        for line in text.split(|c| c == ';' || c == '\n') {
            if line.trim().is_empty() {
                continue;
            }
            let row_idx = rows.len();
            let row = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<u8>()
                        .map_err(|_| InputError::UnparsableCell {
                            row: row_idx,
                            token: token.to_string(),
                        })
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// `rows × cols` matrix of ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![1; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Row `row` as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Owned copy of the `size × size` block whose top-left cell is `(top, left)`.
    ///
    /// # Panics
    /// Panics if the block does not fit inside the matrix.
    pub fn square_block(&self, top: usize, left: usize, size: usize) -> Self {
        assert!(
            top + size <= self.rows && left + size <= self.cols,
            "block out of bounds"
        );
        let mut cells = Vec::with_capacity(size * size);
        for r in top..top + size {
            cells.extend_from_slice(&self.row(r)[left..left + size]);
        }
        Self {
            rows: size,
            cols: size,
            cells,
        }
    }

    /// Trusted constructor for cells already known to be 0/1.
    pub(crate) fn from_binary_cells(rows: usize, cols: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        debug_assert!(cells.iter().all(|&v| v <= 1));
        Self { rows, cols, cells }
    }
}

impl Default for BinaryMatrix {
    fn default() -> Self {
        Self::zeros(0, 0)
    }
}

impl fmt::Display for BinaryMatrix {
    /// One line per row, cells separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
