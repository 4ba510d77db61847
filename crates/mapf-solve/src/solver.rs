//! Strategy selection and the top-level solve facade.

use mapf_core::AgentId;
use mapf_grid::GridGraph;
use mapf_search::{ConstraintTable, Path, SearchError, SpaceTimePlanner, WeightedAStar};

use crate::{Coordinator, ReservationPlanner, Schedule, SolveError, SolveResult};

// ── Strategy ──────────────────────────────────────────────────────────────────

/// Which planning scheme [`solve`] dispatches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Iterative constraint tightening until the schedule is conflict-free
    /// (see [`Coordinator`]).
    #[default]
    Coordinated,
    /// One priority-order pass with reverse-edge reservations (see
    /// [`ReservationPlanner`]).  No conflict detection.
    Reservation,
    /// Every agent planned independently with `weight = 1` and no
    /// constraints.  The baseline: conflicts are left in place.
    Independent,
}

// ── SolverConfig ──────────────────────────────────────────────────────────────

/// Configuration for one planning request.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// The planning scheme.  Default: [`Strategy::Coordinated`].
    pub strategy: Strategy,

    /// Heuristic inflation weight, `>= 1.0`.  `1.0` keeps single-agent
    /// plans optimal; larger values trade path quality for search speed.
    /// Ignored by [`Strategy::Independent`], which always plans optimally.
    pub weight: f64,

    /// Cap on coordinator resolution rounds.  Only used by
    /// [`Strategy::Coordinated`].
    pub max_rounds: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy:   Strategy::Coordinated,
            weight:     1.0,
            max_rounds: Coordinator::DEFAULT_MAX_ROUNDS,
        }
    }
}

// ── Facade ────────────────────────────────────────────────────────────────────

/// Compute a joint schedule for `tasks` using the configured strategy.
///
/// One call, one request: all constraint and reservation state is created
/// here and dropped on return, so back-to-back calls against the same graph
/// never interfere.
pub fn solve(
    graph:  &GridGraph,
    tasks:  &[crate::AgentTask],
    config: &SolverConfig,
) -> SolveResult<Schedule> {
    match config.strategy {
        Strategy::Coordinated => {
            Coordinator::new(config.weight, config.max_rounds).solve(graph, tasks)
        }
        Strategy::Reservation => ReservationPlanner::new(config.weight).solve(graph, tasks),
        Strategy::Independent => solve_independent(graph, tasks),
    }
}

/// The uncoordinated baseline: optimal single-agent plans, no constraints,
/// no conflict handling.
fn solve_independent(graph: &GridGraph, tasks: &[crate::AgentTask]) -> SolveResult<Schedule> {
    let planner = WeightedAStar::optimal();
    let constraints = ConstraintTable::new();
    let mut paths: Vec<Path> = Vec::with_capacity(tasks.len());

    for (i, task) in tasks.iter().enumerate() {
        let agent = AgentId(i as u32);
        let path = planner
            .plan(graph, task.start, task.goal, &constraints)
            .map_err(|e| match e {
                SearchError::CellNotInGraph(cell) => SolveError::InvalidTask { agent, cell },
                SearchError::NoPath { from, to } => {
                    SolveError::UnreachableGoal { agent, from, to }
                }
            })?;
        paths.push(path);
    }

    Ok(Schedule::new(paths))
}
