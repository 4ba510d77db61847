//! Solve-subsystem error type.
//!
//! Every failure is terminal for the whole request: there is no partial or
//! best-effort schedule.  Variants carry the agent and endpoints involved so
//! callers can log or retry with different inputs.

use thiserror::Error;

use mapf_core::{AgentId, Cell};

/// Errors produced by `mapf-solve`.
#[derive(Debug, Error)]
pub enum SolveError {
    /// An agent has no route at all — its start and goal lie in different
    /// connected components (or the goal is walled off).
    #[error("agent {agent}: no route from {from} to {to}")]
    UnreachableGoal {
        agent: AgentId,
        from:  Cell,
        to:    Cell,
    },

    /// A task references a cell that is blocked or outside the grid.
    #[error("agent {agent}: cell {cell} is blocked or out of bounds")]
    InvalidTask { agent: AgentId, cell: Cell },

    /// A constrained replan found no route: the accumulated forbiddances
    /// closed every remaining option for this agent.
    #[error(
        "agent {agent}: no route from {from} to {to} under {constraints} accumulated constraints"
    )]
    CoordinationFailure {
        agent:       AgentId,
        from:        Cell,
        to:          Cell,
        constraints: usize,
    },

    /// The conflict-resolution loop hit its iteration cap without
    /// converging.
    #[error("conflict resolution did not converge within {rounds} rounds")]
    ResolutionLimitExceeded { rounds: u64 },
}

pub type SolveResult<T> = Result<T, SolveError>;
