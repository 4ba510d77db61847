//! Solve observer trait for progress reporting and diagnostics.

use mapf_core::AgentId;
use mapf_search::Path;

use crate::Conflict;

/// Callbacks invoked by [`Coordinator`][crate::Coordinator] at key points
/// in the conflict-resolution loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The engine itself performs no I/O;
/// this trait is the hook for callers that want to log progress.
///
/// # Example — conflict printer
///
/// ```rust,ignore
/// struct ConflictPrinter;
///
/// impl SolveObserver for ConflictPrinter {
///     fn on_conflict(&mut self, round: u64, conflict: &Conflict) {
///         println!("round {round}: {conflict}");
///     }
/// }
/// ```
pub trait SolveObserver {
    /// Called after each agent's initial, unconstrained plan succeeds.
    fn on_initial_plan(&mut self, _agent: AgentId, _path: &Path) {}

    /// Called when a round finds a conflict, before the replan.
    fn on_conflict(&mut self, _round: u64, _conflict: &Conflict) {}

    /// Called after the conflicting agent has been successfully replanned.
    fn on_replan(&mut self, _round: u64, _agent: AgentId, _path: &Path) {}

    /// Called once when the schedule is conflict-free.  `rounds` is the
    /// number of resolution rounds that were needed (0 if the initial
    /// plans never clashed).
    fn on_converged(&mut self, _rounds: u64) {}
}

/// A [`SolveObserver`] that does nothing.  Use when you need to call the
/// coordinator but don't want progress callbacks.
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}
