//! Input validation errors.
//!
//! The kernels themselves never fail: degenerate inputs (no rows, an empty
//! sequence) produce an empty result. Everything here is raised while
//! building validated inputs, before a kernel runs.

use thiserror::Error;

/// Reasons an input is rejected before it reaches a kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A matrix row does not have the width of the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A matrix cell holds something other than 0 or 1.
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    NonBinaryCell { row: usize, col: usize, value: u8 },

    /// A flat cell buffer does not match `rows * cols`.
    #[error("expected {expected} cells, got {found}")]
    CellCount { expected: usize, found: usize },

    /// A token in a textual matrix is not a number.
    #[error("row {row}: cannot read cell {token:?}")]
    UnparsableCell { row: usize, token: String },

    /// A sequence symbol has no entry in the weight table.
    #[error("sequence {sequence}, position {position}: symbol {symbol:?} has no weight")]
    UnknownSymbol {
        sequence: usize,
        position: usize,
        symbol: char,
    },

    /// A dense weight table was built from the wrong number of entries.
    #[error("weight table needs {expected} entries, got {found}")]
    WeightTableSize { expected: usize, found: usize },

    #[error("mismatch penalty must be finite, got {0}")]
    NonFinitePenalty(f64),
}
