//! Request-scoped restrictions the search must honour.
//!
//! Both types here are explicit values owned by a single planning request —
//! never ambient shared state — so two requests against the same graph can
//! run back to back (or, in principle, concurrently) without interference.

use rustc_hash::{FxHashMap, FxHashSet};

use mapf_core::{Step, VertexId};

// ── ConstraintTable ───────────────────────────────────────────────────────────

/// Forbidden `(vertex, arrival step)` pairs, accumulated over one
/// coordination run.
///
/// The table is grow-only: there is no removal API, so a forbiddance added
/// in an early round is guaranteed to still hold in every later round.  One
/// table is shared by all replans within a run.
#[derive(Clone, Debug, Default)]
pub struct ConstraintTable {
    forbidden: FxHashMap<VertexId, FxHashSet<Step>>,
}

impl ConstraintTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbid arriving at `vertex` exactly at `step`.
    pub fn forbid(&mut self, vertex: VertexId, step: Step) {
        self.forbidden.entry(vertex).or_default().insert(step);
    }

    /// `true` if arrival at `vertex` at `step` is forbidden.
    #[inline]
    pub fn is_forbidden(&self, vertex: VertexId, step: Step) -> bool {
        self.forbidden
            .get(&vertex)
            .is_some_and(|steps| steps.contains(&step))
    }

    /// Total number of forbidden `(vertex, step)` pairs.
    pub fn len(&self) -> usize {
        self.forbidden.values().map(|steps| steps.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty()
    }
}

// ── ReservedEdges ─────────────────────────────────────────────────────────────

/// Directed edges closed for the remainder of one priority-order planning
/// pass.
///
/// After an agent's path is committed, the reverse of every edge it traversed
/// is reserved here so later agents cannot be routed head-on against it in
/// the same corridor.  The overlay is consulted by the search alongside the
/// graph; the graph itself is never mutated.
#[derive(Clone, Debug, Default)]
pub struct ReservedEdges {
    closed: FxHashSet<(VertexId, VertexId)>,
}

impl ReservedEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the directed edge `from -> to`.
    pub fn reserve(&mut self, from: VertexId, to: VertexId) {
        self.closed.insert((from, to));
    }

    /// `true` if the directed edge `from -> to` has been closed.
    #[inline]
    pub fn is_reserved(&self, from: VertexId, to: VertexId) -> bool {
        self.closed.contains(&(from, to))
    }

    pub fn len(&self) -> usize {
        self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closed.is_empty()
    }
}
