//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `mapf-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("row {row} has length {got}, expected {expected} (grid must be rectangular)")]
    RaggedRow {
        row:      usize,
        expected: usize,
        got:      usize,
    },
}

pub type GridResult<T> = Result<T, GridError>;
