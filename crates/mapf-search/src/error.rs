//! Search-subsystem error type.

use thiserror::Error;

use mapf_core::Cell;

/// Errors produced by `mapf-search`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The frontier emptied without reaching the goal — either no route
    /// exists in the graph, or every route is blocked by constraints.
    #[error("no path from {from} to {to}")]
    NoPath { from: Cell, to: Cell },

    /// The start or goal cell is blocked or outside the grid.
    #[error("cell {0} is not a graph vertex")]
    CellNotInGraph(Cell),
}

pub type SearchResult<T> = Result<T, SearchError>;
