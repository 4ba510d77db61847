//! A single agent's movement schedule.

use mapf_core::{Cell, Step};

/// An ordered cell sequence, one cell per discrete time step.
///
/// Index 0 is the start; index `i` is the agent's position at [`Step`]`(i)`.
/// Consecutive cells are graph-adjacent (or identical for a hold step added
/// by presentation padding).  A path of length `n` arrives at its goal at
/// step `n - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Wrap a cell sequence.  The sequence must be non-empty.
    pub fn new(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty(), "a path always contains its start cell");
        Self { cells }
    }

    /// Number of occupied steps (arrival step + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A path is never empty; this exists to satisfy the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The step at which the agent reaches its final cell.
    #[inline]
    pub fn arrival_step(&self) -> Step {
        Step(self.cells.len() as u64 - 1)
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// The agent's position at `step`.
    ///
    /// Past the end of the path the agent is treated as holding at its final
    /// cell — the convention conflict checking uses for finished agents.
    #[inline]
    pub fn position_at(&self, step: Step) -> Cell {
        let i = (step.0 as usize).min(self.cells.len() - 1);
        self.cells[i]
    }

    /// The underlying cell sequence.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy of this path extended to `len` steps by repeating the final
    /// cell.  Presentation helper for synchronized playback; the padded
    /// tail is not part of the planned schedule.
    pub fn padded_to(&self, len: usize) -> Vec<Cell> {
        let mut cells = self.cells.clone();
        let last = self.goal();
        cells.resize(len.max(cells.len()), last);
        cells
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Cell;
    #[inline]
    fn index(&self, i: usize) -> &Cell {
        &self.cells[i]
    }
}
