//! Grid map: a rectangular field of passable and blocked cells.

use mapf_core::Cell;

use crate::{GridError, GridResult};

/// A rectangular grid of cells, each passable or blocked.
///
/// Parsed from text rows where one designated character marks a passable
/// cell and every other character marks a blocked one.  The map is the
/// source of truth for passability; the derived [`GridGraph`][crate::GridGraph]
/// holds the adjacency relation.
#[derive(Clone, Debug)]
pub struct GridMap {
    height:   u32,
    width:    u32,
    /// Row-major passability flags, `height * width` entries.
    passable: Vec<bool>,
}

impl GridMap {
    /// Parse a map from text rows.
    ///
    /// `passable` is the character denoting a traversable cell (commonly
    /// `'.'`); any other character blocks the cell.  All rows must have the
    /// same length.  An empty slice yields an empty map.
    pub fn parse<S: AsRef<str>>(rows: &[S], passable: char) -> GridResult<GridMap> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());

        let mut flags = Vec::with_capacity(height * width);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let got = row.chars().count();
            if got != width {
                return Err(GridError::RaggedRow { row: i, expected: width, got });
            }
            flags.extend(row.chars().map(|c| c == passable));
        }

        Ok(GridMap {
            height: height as u32,
            width:  width as u32,
            passable: flags,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Total number of cells, passable or not.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.passable.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// `true` if `cell` is inside the grid and traversable.
    ///
    /// Out-of-bounds coordinates are simply not passable — callers never
    /// need a separate bounds check.
    #[inline]
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell)
            && self.passable[cell.row as usize * self.width as usize + cell.col as usize]
    }

    /// Iterator over all passable cells in row-major order.
    pub fn passable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.passable
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p)
            .map(|(i, _)| Cell::new(i as u32 / self.width, i as u32 % self.width))
    }
}
