//! Planner trait and the default weighted space-time A* implementation.
//!
//! # Pluggability
//!
//! `mapf-solve` calls single-agent planning via the [`SpaceTimePlanner`]
//! trait, so applications can swap in custom implementations (SIPP, jump
//! point search, landmark heuristics) without touching the coordination
//! layer.  The default [`WeightedAStar`] is sufficient for grid maps.
//!
//! # Cost and time
//!
//! Every edge has unit cost, so an agent's accumulated cost at a vertex
//! *is* its arrival step there.  This is what lets the constraint table —
//! a set of forbidden `(vertex, step)` pairs — be checked directly against
//! the tentative cost during relaxation.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use mapf_core::{Cell, Step, VertexId};
use mapf_grid::GridGraph;

use crate::{ConstraintTable, Path, ReservedEdges, SearchError, SearchResult};

// ── SpaceTimePlanner trait ────────────────────────────────────────────────────

/// Pluggable single-agent planner.
///
/// Implementations must honour the constraint table: the returned path may
/// never arrive at a forbidden `(vertex, step)` pair.
pub trait SpaceTimePlanner {
    /// Compute a path from `start` to `goal` that avoids every forbidden
    /// `(cell, step)` pair in `constraints`.
    ///
    /// `start == goal` yields the one-element path holding that cell.
    fn plan(
        &self,
        graph:       &GridGraph,
        start:       Cell,
        goal:        Cell,
        constraints: &ConstraintTable,
    ) -> SearchResult<Path>;
}

// ── WeightedAStar ─────────────────────────────────────────────────────────────

/// Best-first search with an inflatable Manhattan heuristic.
///
/// The priority of a vertex is `g + weight * manhattan(cell, goal)` where
/// `g` is the cost (= step count) accumulated so far.  `weight = 1.0` gives
/// optimal shortest paths; `weight > 1.0` biases expansion toward the goal,
/// trading optimality for speed.
///
/// Ties are broken by lower `g`, then lower vertex id, so results are
/// deterministic for a fixed graph and constraint table.
#[derive(Clone, Copy, Debug)]
pub struct WeightedAStar {
    /// Heuristic inflation factor, `>= 1.0`.
    pub weight: f64,
}

impl WeightedAStar {
    /// A planner with the given inflation weight.
    ///
    /// # Panics
    /// Panics in debug mode if `weight < 1.0` (the heuristic would no
    /// longer be goal-directed in any useful sense).
    pub fn new(weight: f64) -> Self {
        debug_assert!(weight >= 1.0, "inflation weight must be >= 1.0");
        Self { weight }
    }

    /// The optimal (`weight = 1.0`) configuration.
    pub fn optimal() -> Self {
        Self { weight: 1.0 }
    }

    /// Like [`SpaceTimePlanner::plan`], but additionally refuses to traverse
    /// any directed edge closed in `reserved`.  Used by the priority-order
    /// reservation strategy.
    pub fn plan_avoiding(
        &self,
        graph:       &GridGraph,
        start:       Cell,
        goal:        Cell,
        constraints: &ConstraintTable,
        reserved:    &ReservedEdges,
    ) -> SearchResult<Path> {
        search(graph, start, goal, constraints, Some(reserved), self.weight)
    }
}

impl SpaceTimePlanner for WeightedAStar {
    fn plan(
        &self,
        graph:       &GridGraph,
        start:       Cell,
        goal:        Cell,
        constraints: &ConstraintTable,
    ) -> SearchResult<Path> {
        search(graph, start, goal, constraints, None, self.weight)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// Open-list entry.  Ordered ascending by `(f, g, vertex)`; `f` comparison
/// uses `total_cmp` (finite by construction — both operands derive from
/// integer costs and a finite weight).
#[derive(Copy, Clone, Debug)]
struct QueueEntry {
    f:      f64,
    g:      u64,
    vertex: VertexId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

fn search(
    graph:       &GridGraph,
    start:       Cell,
    goal:        Cell,
    constraints: &ConstraintTable,
    reserved:    Option<&ReservedEdges>,
    weight:      f64,
) -> SearchResult<Path> {
    let src = graph.vertex(start).ok_or(SearchError::CellNotInGraph(start))?;
    let dst = graph.vertex(goal).ok_or(SearchError::CellNotInGraph(goal))?;

    if src == dst {
        return Ok(Path::new(vec![start]));
    }

    let n = graph.vertex_count();
    // dist[v] = best known arrival step at v.
    let mut dist = vec![u64::MAX; n];
    // pred[v] = vertex that reached v; INVALID for unreached vertices.
    let mut pred = vec![VertexId::INVALID; n];

    dist[src.index()] = 0;

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    let mut open: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
    open.push(Reverse(QueueEntry {
        f:      weight * f64::from(start.manhattan(goal)),
        g:      0,
        vertex: src,
    }));

    while let Some(Reverse(entry)) = open.pop() {
        let current = entry.vertex;

        if current == dst {
            return Ok(reconstruct(graph, &pred, src, dst));
        }

        // Skip stale heap entries.
        if entry.g > dist[current.index()] {
            continue;
        }

        let arrival = entry.g + 1;
        for neighbor in graph.neighbors(current) {
            if let Some(r) = reserved
                && r.is_reserved(current, neighbor)
            {
                continue;
            }
            // Relax only on strict improvement, and only if the resulting
            // arrival step is not forbidden.  A vertex whose improving
            // arrival is forbidden stays reachable via other routes.
            if arrival < dist[neighbor.index()]
                && !constraints.is_forbidden(neighbor, Step(arrival))
            {
                dist[neighbor.index()] = arrival;
                pred[neighbor.index()] = current;
                open.push(Reverse(QueueEntry {
                    f:      arrival as f64
                        + weight * f64::from(graph.cell(neighbor).manhattan(goal)),
                    g:      arrival,
                    vertex: neighbor,
                }));
            }
        }
    }

    Err(SearchError::NoPath { from: start, to: goal })
}

fn reconstruct(graph: &GridGraph, pred: &[VertexId], src: VertexId, dst: VertexId) -> Path {
    let mut cells = Vec::new();
    let mut cur = dst;
    while cur != src {
        cells.push(graph.cell(cur));
        cur = pred[cur.index()];
    }
    cells.push(graph.cell(src));
    cells.reverse();
    Path::new(cells)
}
