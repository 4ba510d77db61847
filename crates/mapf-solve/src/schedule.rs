//! Agent tasks and the joint schedule produced for them.

use mapf_core::{AgentId, Cell, Step};
use mapf_search::Path;

// ── AgentTask ─────────────────────────────────────────────────────────────────

/// One agent's planning request: where it starts and where it must end up.
///
/// Tasks are immutable inputs; agents are identified by their index in the
/// task list ([`AgentId`]).  Both cells must be passable — the engine does
/// not deduplicate or validate start/goal assignments beyond that.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentTask {
    pub start: Cell,
    pub goal:  Cell,
}

impl AgentTask {
    #[inline]
    pub const fn new(start: Cell, goal: Cell) -> Self {
        Self { start, goal }
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// A complete joint movement schedule: one [`Path`] per agent, in task-list
/// order.
///
/// Whether the schedule is conflict-free depends on the strategy that
/// produced it; run [`first_conflict`][crate::first_conflict] over
/// [`paths`][Self::paths] to check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    paths: Vec<Path>,
}

impl Schedule {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    pub fn agent_count(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn path(&self, agent: AgentId) -> &Path {
        &self.paths[agent.index()]
    }

    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Length of the longest path — the number of steps until every agent
    /// has arrived.
    pub fn makespan(&self) -> usize {
        self.paths.iter().map(Path::len).max().unwrap_or(0)
    }

    /// Every agent's position at `step` (finished agents hold at goal).
    pub fn positions_at(&self, step: Step) -> Vec<Cell> {
        self.paths.iter().map(|p| p.position_at(step)).collect()
    }

    /// All paths extended to the makespan by repeating each final cell.
    ///
    /// This is a presentation transform for synchronized playback only; the
    /// padded tails are not part of any agent's planned schedule, and the
    /// result must not be fed back into planning.
    pub fn padded_paths(&self) -> Vec<Vec<Cell>> {
        let makespan = self.makespan();
        self.paths.iter().map(|p| p.padded_to(makespan)).collect()
    }
}
