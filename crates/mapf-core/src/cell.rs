//! Grid coordinates and the Manhattan metric.

use std::fmt;

/// A position on the grid, identified by `(row, column)`.
///
/// Cells are plain value types: `Copy`, hashable, and totally ordered
/// (row-major) so they can key maps and appear in sorted collections.
/// Blocked cells are representable — passability is a property of the
/// `GridMap`, not of the coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// On an obstruction-free grid this equals the shortest 4-directional
    /// path length, which makes it an admissible search heuristic.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Cell {
    #[inline]
    fn from((row, col): (u32, u32)) -> Self {
        Cell { row, col }
    }
}
