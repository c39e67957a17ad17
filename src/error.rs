//! Errors raised while building grids

use thiserror::Error;

/// Failure to build a rectangular grid from rows or text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {row} has length {length}, expected {expected} (all rows must have the same length)")]
    RaggedRow {
        row: usize,
        length: usize,
        expected: usize,
    },

    #[error("grid is {actual:?} (height, width), expected {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}
