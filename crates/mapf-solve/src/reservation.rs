//! Priority-order reservation planning.

use mapf_core::AgentId;
use mapf_grid::GridGraph;
use mapf_search::{ConstraintTable, Path, ReservedEdges, SearchError, WeightedAStar};

use crate::{AgentTask, Schedule, SolveError, SolveResult};

/// Plans agents strictly in task-list order, one pass, no replanning.
///
/// After each agent's path is committed, the reverse of every directed edge
/// it traversed is closed via a [`ReservedEdges`] overlay, so later agents
/// cannot be routed head-on through the same corridor.  The overlay lives
/// only for the duration of one `solve` call; the graph is never mutated.
///
/// This is the cheap, non-optimal strategy: it performs no conflict
/// detection (the result can still contain vertex conflicts) and never
/// backtracks — if earlier agents consume all routes to a later agent's
/// goal, that agent fails terminally with
/// [`SolveError::UnreachableGoal`].
#[derive(Clone, Copy, Debug)]
pub struct ReservationPlanner {
    planner: WeightedAStar,
}

impl ReservationPlanner {
    pub fn new(weight: f64) -> Self {
        Self { planner: WeightedAStar::new(weight) }
    }

    pub fn solve(&self, graph: &GridGraph, tasks: &[AgentTask]) -> SolveResult<Schedule> {
        // No space-time constraints in this strategy; only the edge overlay.
        let constraints = ConstraintTable::new();
        let mut reserved = ReservedEdges::new();
        let mut paths: Vec<Path> = Vec::with_capacity(tasks.len());

        for (i, task) in tasks.iter().enumerate() {
            let agent = AgentId(i as u32);
            let path = self
                .planner
                .plan_avoiding(graph, task.start, task.goal, &constraints, &reserved)
                .map_err(|e| match e {
                    SearchError::CellNotInGraph(cell) => SolveError::InvalidTask { agent, cell },
                    SearchError::NoPath { from, to } => {
                        SolveError::UnreachableGoal { agent, from, to }
                    }
                })?;

            // Close the reverse of every edge this path used.
            for pair in path.cells().windows(2) {
                let (from, to) = (pair[0], pair[1]);
                if let (Some(u), Some(v)) = (graph.vertex(from), graph.vertex(to)) {
                    reserved.reserve(v, u);
                }
            }

            paths.push(path);
        }

        Ok(Schedule::new(paths))
    }
}
