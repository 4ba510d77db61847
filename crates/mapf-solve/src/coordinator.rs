//! Greedy constraint-tightening coordination across all agents.

use mapf_core::AgentId;
use mapf_grid::GridGraph;
use mapf_search::{ConstraintTable, Path, SearchError, SpaceTimePlanner, WeightedAStar};

use crate::{
    first_conflict, AgentTask, NoopObserver, Schedule, SolveError, SolveObserver, SolveResult,
};

/// Iterative conflict resolution: plan all agents independently, then
/// repeatedly forbid the first conflicting agent's cell at the conflict
/// step and replan that agent alone, until the joint schedule is
/// conflict-free.
///
/// All replans within a run share one grow-only [`ConstraintTable`], so a
/// forbiddance added in an early round binds every later replan too.
///
/// # Completeness
///
/// This is a single-branch scheme: it always penalizes the first-listed
/// agent of a conflict and never revisits that choice, so it can fail on
/// instances a branching constraint-tree search would solve (a strict
/// one-wide corridor with two opposing agents, for example).  It is fast
/// in the common case and its failure modes are explicit:
/// [`SolveError::CoordinationFailure`] when a constrained agent runs out
/// of routes, [`SolveError::ResolutionLimitExceeded`] when the round cap
/// is hit.
#[derive(Clone, Copy, Debug)]
pub struct Coordinator {
    planner:    WeightedAStar,
    max_rounds: u64,
}

impl Coordinator {
    /// Default cap on resolution rounds.
    pub const DEFAULT_MAX_ROUNDS: u64 = 10_000;

    pub fn new(weight: f64, max_rounds: u64) -> Self {
        Self { planner: WeightedAStar::new(weight), max_rounds }
    }

    /// An optimal-search coordinator with the default round cap.
    pub fn optimal() -> Self {
        Self::new(1.0, Self::DEFAULT_MAX_ROUNDS)
    }

    /// Solve without progress callbacks.
    pub fn solve(&self, graph: &GridGraph, tasks: &[AgentTask]) -> SolveResult<Schedule> {
        self.solve_with_observer(graph, tasks, &mut NoopObserver)
    }

    /// Solve, reporting initial plans, conflicts, and replans to `observer`.
    pub fn solve_with_observer<O: SolveObserver>(
        &self,
        graph:    &GridGraph,
        tasks:    &[AgentTask],
        observer: &mut O,
    ) -> SolveResult<Schedule> {
        let mut constraints = ConstraintTable::new();

        // ── Initial plans: every agent, no constraints yet ────────────────
        //
        // Any failure here aborts the whole request; there is no partial
        // schedule.
        let mut paths: Vec<Path> = Vec::with_capacity(tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            let agent = AgentId(i as u32);
            let path = self
                .planner
                .plan(graph, task.start, task.goal, &constraints)
                .map_err(|e| initial_error(agent, e))?;
            observer.on_initial_plan(agent, &path);
            paths.push(path);
        }

        // ── Resolution loop ───────────────────────────────────────────────
        let mut rounds = 0u64;
        loop {
            let conflict = match first_conflict(&paths) {
                None => {
                    observer.on_converged(rounds);
                    return Ok(Schedule::new(paths));
                }
                Some(c) => c,
            };

            rounds += 1;
            if rounds > self.max_rounds {
                return Err(SolveError::ResolutionLimitExceeded { rounds: self.max_rounds });
            }
            observer.on_conflict(rounds, &conflict);

            // Forbid agent `a`'s position at the conflict step, then replan
            // only agent `a`.  The other path is left untouched.
            let agent = conflict.a;
            let task = &tasks[agent.index()];
            let cell = paths[agent.index()].position_at(conflict.step);
            let vertex = graph
                .vertex(cell)
                .expect("path cells are graph vertices");
            constraints.forbid(vertex, conflict.step);

            let path = self
                .planner
                .plan(graph, task.start, task.goal, &constraints)
                .map_err(|e| replan_error(agent, task, constraints.len(), e))?;
            observer.on_replan(rounds, agent, &path);
            paths[agent.index()] = path;
        }
    }
}

fn initial_error(agent: AgentId, err: SearchError) -> SolveError {
    match err {
        SearchError::CellNotInGraph(cell) => SolveError::InvalidTask { agent, cell },
        SearchError::NoPath { from, to } => SolveError::UnreachableGoal { agent, from, to },
    }
}

fn replan_error(
    agent:       AgentId,
    task:        &AgentTask,
    constraints: usize,
    err:         SearchError,
) -> SolveError {
    match err {
        SearchError::CellNotInGraph(cell) => SolveError::InvalidTask { agent, cell },
        SearchError::NoPath { .. } => SolveError::CoordinationFailure {
            agent,
            from: task.start,
            to: task.goal,
            constraints,
        },
    }
}
