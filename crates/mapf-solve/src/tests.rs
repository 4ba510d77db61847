//! Unit tests for mapf-solve.

#[cfg(test)]
mod helpers {
    use mapf_core::Cell;
    use mapf_grid::{GridGraph, GridMap};

    use crate::AgentTask;

    /// Build a graph from text rows ('.' passable, anything else blocked).
    pub fn graph(rows: &[&str]) -> GridGraph {
        GridGraph::build(&GridMap::parse(rows, '.').unwrap())
    }

    pub fn task(start: (u32, u32), goal: (u32, u32)) -> AgentTask {
        AgentTask::new(Cell::new(start.0, start.1), Cell::new(goal.0, goal.1))
    }
}

// ── Conflict detection ────────────────────────────────────────────────────────

#[cfg(test)]
mod conflict {
    use mapf_core::{AgentId, Cell, Step};
    use mapf_search::Path;

    use crate::{first_conflict, ConflictKind};

    fn path(cells: &[(u32, u32)]) -> Path {
        Path::new(cells.iter().map(|&(r, c)| Cell::new(r, c)).collect())
    }

    #[test]
    fn vertex_conflict() {
        let paths = vec![path(&[(0, 0), (0, 1)]), path(&[(0, 2), (0, 1)])];
        let c = first_conflict(&paths).unwrap();
        assert_eq!(c.a, AgentId(0));
        assert_eq!(c.b, AgentId(1));
        assert_eq!(c.step, Step(1));
        assert_eq!(c.kind, ConflictKind::Vertex(Cell::new(0, 1)));
    }

    #[test]
    fn swap_conflict() {
        let paths = vec![path(&[(0, 0), (0, 1)]), path(&[(0, 1), (0, 0)])];
        let c = first_conflict(&paths).unwrap();
        assert_eq!(c.step, Step(1));
        assert_eq!(
            c.kind,
            ConflictKind::Swap { from: Cell::new(0, 0), to: Cell::new(0, 1) }
        );
    }

    #[test]
    fn no_conflict_on_parallel_rows() {
        let paths = vec![
            path(&[(0, 0), (0, 1), (0, 2)]),
            path(&[(1, 0), (1, 1), (1, 2)]),
        ];
        assert!(first_conflict(&paths).is_none());
    }

    #[test]
    fn finished_agent_holds_at_goal() {
        // Agent 0 is already parked at (0,0); agent 1 drives into it at t2.
        let paths = vec![path(&[(0, 0)]), path(&[(0, 2), (0, 1), (0, 0)])];
        let c = first_conflict(&paths).unwrap();
        assert_eq!(c.step, Step(2));
        assert_eq!(c.kind, ConflictKind::Vertex(Cell::new(0, 0)));
    }

    #[test]
    fn earliest_step_wins() {
        // Pair (1,2) clashes at t1; pair (0,1) would clash at t2.
        let paths = vec![
            path(&[(0, 0), (0, 1)]),
            path(&[(2, 1), (1, 1), (0, 1)]),
            path(&[(1, 0), (1, 1), (1, 2)]),
        ];
        let c = first_conflict(&paths).unwrap();
        assert_eq!(c.step, Step(1));
        assert_eq!((c.a, c.b), (AgentId(1), AgentId(2)));
    }

    #[test]
    fn pair_order_within_step() {
        // At t0 agents 0/2 and 1/2 both collide with 2; (0,2) is scanned
        // before (1,2).
        let paths = vec![
            path(&[(0, 0)]),
            path(&[(0, 1)]),
            path(&[(0, 0)]),
        ];
        let c = first_conflict(&paths).unwrap();
        assert_eq!((c.a, c.b), (AgentId(0), AgentId(2)));
    }

    #[test]
    fn empty_and_single() {
        assert!(first_conflict(&[]).is_none());
        assert!(first_conflict(&[path(&[(0, 0), (0, 1)])]).is_none());
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule {
    use mapf_core::{Cell, Step};
    use mapf_search::Path;

    use crate::Schedule;

    #[test]
    fn makespan_and_padding() {
        let schedule = Schedule::new(vec![
            Path::new(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]),
            Path::new(vec![Cell::new(1, 0)]),
        ]);
        assert_eq!(schedule.makespan(), 3);

        let padded = schedule.padded_paths();
        assert_eq!(padded[0].len(), 3);
        assert_eq!(padded[1].len(), 3);
        // Finished agent's tail repeats its final cell.
        assert_eq!(padded[1], vec![Cell::new(1, 0); 3]);
    }

    #[test]
    fn positions_at_step() {
        let schedule = Schedule::new(vec![
            Path::new(vec![Cell::new(0, 0), Cell::new(0, 1)]),
            Path::new(vec![Cell::new(1, 0)]),
        ]);
        assert_eq!(
            schedule.positions_at(Step(1)),
            vec![Cell::new(0, 1), Cell::new(1, 0)]
        );
        // Past the makespan everyone holds.
        assert_eq!(
            schedule.positions_at(Step(10)),
            vec![Cell::new(0, 1), Cell::new(1, 0)]
        );
    }

    #[test]
    fn empty_schedule() {
        let schedule = Schedule::new(vec![]);
        assert_eq!(schedule.agent_count(), 0);
        assert_eq!(schedule.makespan(), 0);
        assert!(schedule.padded_paths().is_empty());
    }
}

// ── Coordinator ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod coordinator {
    use mapf_core::{AgentId, Cell, Step};
    use mapf_search::Path;

    use crate::{first_conflict, Conflict, Coordinator, SolveError, SolveObserver};

    #[test]
    fn single_agent_start_equals_goal() {
        let g = super::helpers::graph(&["..."]);
        let schedule = Coordinator::optimal()
            .solve(&g, &[super::helpers::task((0, 1), (0, 1))])
            .unwrap();
        assert_eq!(schedule.path(AgentId(0)).cells(), &[Cell::new(0, 1)]);
    }

    #[test]
    fn crossing_agents_resolve_with_side_passage() {
        // Two agents swap ends of row 0; row 1 offers the detour.
        let g = super::helpers::graph(&["...", "..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        let schedule = Coordinator::optimal().solve(&g, &tasks).unwrap();

        assert!(first_conflict(schedule.paths()).is_none());
        assert_eq!(schedule.path(AgentId(0)).goal(), Cell::new(0, 2));
        assert_eq!(schedule.path(AgentId(1)).goal(), Cell::new(0, 0));
        // Agent 0 (first in the conflict pair) takes the detour; agent 1
        // keeps its direct route.
        assert_eq!(schedule.path(AgentId(0)).len(), 5);
        assert_eq!(schedule.path(AgentId(1)).len(), 3);
    }

    #[test]
    fn strict_corridor_swap_is_coordination_failure() {
        // A 1-wide corridor has no side passage: constraining agent 0 away
        // from the shared middle cell leaves it routeless.
        let g = super::helpers::graph(&["..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        let err = Coordinator::optimal().solve(&g, &tasks).unwrap_err();
        assert!(matches!(
            err,
            SolveError::CoordinationFailure { agent: AgentId(0), .. }
        ));
    }

    #[test]
    fn disconnected_goal_aborts_whole_request() {
        let g = super::helpers::graph(&[".#."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 0)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        let err = Coordinator::optimal().solve(&g, &tasks).unwrap_err();
        match err {
            SolveError::UnreachableGoal { agent, from, to } => {
                assert_eq!(agent, AgentId(1));
                assert_eq!(from, Cell::new(0, 2));
                assert_eq!(to, Cell::new(0, 0));
            }
            other => panic!("expected UnreachableGoal, got {other}"),
        }
    }

    #[test]
    fn blocked_task_cell_is_invalid() {
        let g = super::helpers::graph(&[".#."]);
        let err = Coordinator::optimal()
            .solve(&g, &[super::helpers::task((0, 0), (0, 1))])
            .unwrap_err();
        assert!(matches!(
            err,
            SolveError::InvalidTask { agent: AgentId(0), cell } if cell == Cell::new(0, 1)
        ));
    }

    #[test]
    fn round_cap_is_enforced() {
        let g = super::helpers::graph(&["...", "..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        // Zero rounds allowed: the very first conflict trips the cap.
        let err = Coordinator::new(1.0, 0).solve(&g, &tasks).unwrap_err();
        assert!(matches!(err, SolveError::ResolutionLimitExceeded { rounds: 0 }));
    }

    #[test]
    fn deterministic_across_invocations() {
        let g = super::helpers::graph(&["...", "..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        let coordinator = Coordinator::optimal();
        let a = coordinator.solve(&g, &tasks).unwrap();
        let b = coordinator.solve(&g, &tasks).unwrap();
        assert_eq!(a, b);
    }

    // ── Observer ──────────────────────────────────────────────────────────

    #[derive(Default)]
    struct Counting {
        initial:   usize,
        conflicts: Vec<Step>,
        replans:   Vec<AgentId>,
        converged: Option<u64>,
    }

    impl SolveObserver for Counting {
        fn on_initial_plan(&mut self, _agent: AgentId, _path: &Path) {
            self.initial += 1;
        }
        fn on_conflict(&mut self, _round: u64, conflict: &Conflict) {
            self.conflicts.push(conflict.step);
        }
        fn on_replan(&mut self, _round: u64, agent: AgentId, _path: &Path) {
            self.replans.push(agent);
        }
        fn on_converged(&mut self, rounds: u64) {
            self.converged = Some(rounds);
        }
    }

    #[test]
    fn observer_sees_the_resolution() {
        let g = super::helpers::graph(&["...", "..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        let mut obs = Counting::default();
        Coordinator::optimal()
            .solve_with_observer(&g, &tasks, &mut obs)
            .unwrap();

        assert_eq!(obs.initial, 2);
        // One vertex conflict at t1, resolved by replanning agent 0.
        assert_eq!(obs.conflicts, vec![Step(1)]);
        assert_eq!(obs.replans, vec![AgentId(0)]);
        assert_eq!(obs.converged, Some(1));
    }
}

// ── ReservationPlanner ────────────────────────────────────────────────────────

#[cfg(test)]
mod reservation {
    use mapf_core::{AgentId, Cell};

    use crate::{ReservationPlanner, SolveError};

    #[test]
    fn oncoming_agent_is_blocked_in_corridor() {
        let g = super::helpers::graph(&["..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        let err = ReservationPlanner::new(1.0).solve(&g, &tasks).unwrap_err();
        assert!(matches!(
            err,
            SolveError::UnreachableGoal { agent: AgentId(1), .. }
        ));
    }

    #[test]
    fn oncoming_agent_detours_when_possible() {
        let g = super::helpers::graph(&["...", "..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        let schedule = ReservationPlanner::new(1.0).solve(&g, &tasks).unwrap();
        // Agent 0 keeps row 0; agent 1 must come back through row 1.
        assert_eq!(schedule.path(AgentId(0)).len(), 3);
        assert_eq!(schedule.path(AgentId(1)).len(), 5);
        assert_eq!(schedule.path(AgentId(1)).goal(), Cell::new(0, 0));
    }

    #[test]
    fn same_direction_agents_unaffected() {
        let g = super::helpers::graph(&["...", "..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((1, 0), (1, 2)),
        ];
        let schedule = ReservationPlanner::new(1.0).solve(&g, &tasks).unwrap();
        assert_eq!(schedule.path(AgentId(0)).len(), 3);
        assert_eq!(schedule.path(AgentId(1)).len(), 3);
    }
}

// ── Strategy facade ───────────────────────────────────────────────────────────

#[cfg(test)]
mod solver {
    use mapf_core::Step;

    use crate::{first_conflict, solve, ConflictKind, SolverConfig, Strategy};

    #[test]
    fn default_config_is_coordinated_and_conflict_free() {
        let g = super::helpers::graph(&["...", "..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        let schedule = solve(&g, &tasks, &SolverConfig::default()).unwrap();
        assert!(first_conflict(schedule.paths()).is_none());
    }

    #[test]
    fn independent_baseline_leaves_conflicts_in_place() {
        let g = super::helpers::graph(&["...", "..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        let config = SolverConfig { strategy: Strategy::Independent, ..Default::default() };
        let schedule = solve(&g, &tasks, &config).unwrap();

        let c = first_conflict(schedule.paths()).unwrap();
        assert_eq!(c.step, Step(1));
        assert!(matches!(c.kind, ConflictKind::Vertex(_)));
    }

    #[test]
    fn reservation_strategy_dispatches() {
        let g = super::helpers::graph(&["..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        let config = SolverConfig { strategy: Strategy::Reservation, ..Default::default() };
        assert!(solve(&g, &tasks, &config).is_err());
    }

    #[test]
    fn random_independent_tasks_take_shortest_paths() {
        // Randomized scenarios on an open grid: the baseline must hand
        // every agent a Manhattan-length path regardless of how tasks
        // overlap.  Seeded RNG keeps the test reproducible.
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let g = super::helpers::graph(&["......"; 6]);
        let config = SolverConfig { strategy: Strategy::Independent, ..Default::default() };
        let mut rng = SmallRng::seed_from_u64(0xC0FFEE);

        for _ in 0..25 {
            let tasks: Vec<_> = (0..4)
                .map(|_| {
                    super::helpers::task(
                        (rng.gen_range(0..6u32), rng.gen_range(0..6u32)),
                        (rng.gen_range(0..6u32), rng.gen_range(0..6u32)),
                    )
                })
                .collect();
            let schedule = solve(&g, &tasks, &config).unwrap();
            for (task, path) in tasks.iter().zip(schedule.paths()) {
                assert_eq!(path.start(), task.start);
                assert_eq!(path.goal(), task.goal);
                assert_eq!(
                    path.arrival_step().0,
                    u64::from(task.start.manhattan(task.goal)),
                );
            }
        }
    }

    #[test]
    fn inflated_weight_still_converges() {
        let g = super::helpers::graph(&["...", "..."]);
        let tasks = [
            super::helpers::task((0, 0), (0, 2)),
            super::helpers::task((0, 2), (0, 0)),
        ];
        let config = SolverConfig { weight: 1.5, ..Default::default() };
        let schedule = solve(&g, &tasks, &config).unwrap();
        assert!(first_conflict(schedule.paths()).is_none());
    }
}
