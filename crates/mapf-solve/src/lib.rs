//! `mapf-solve` — joint schedules for multiple agents on a shared grid.
//!
//! Takes a [`GridGraph`][mapf_grid::GridGraph] and a list of
//! [`AgentTask`]s and produces a [`Schedule`]: one path per agent such
//! that (under the coordinated strategy) no two agents ever occupy the
//! same cell at the same step or swap cells between consecutive steps.
//!
//! # Crate layout
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`schedule`]    | `AgentTask`, `Schedule`                             |
//! | [`conflict`]    | `Conflict`, `ConflictKind`, `first_conflict`        |
//! | [`coordinator`] | `Coordinator` (greedy constraint tightening)        |
//! | [`reservation`] | `ReservationPlanner` (priority order, single pass)  |
//! | [`solver`]      | `Strategy`, `SolverConfig`, `solve` facade          |
//! | [`observer`]    | `SolveObserver`, `NoopObserver`                     |
//! | [`error`]       | `SolveError`, `SolveResult<T>`                      |
//!
//! # Choosing a strategy
//!
//! | Strategy      | Conflict-free? | Complete?            | Cost            |
//! |---------------|----------------|----------------------|-----------------|
//! | `Coordinated` | yes            | no (greedy, capped)  | replans in loop |
//! | `Reservation` | swaps discouraged only | no           | one linear pass |
//! | `Independent` | no             | per-agent only       | one linear pass |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod conflict;
pub mod coordinator;
pub mod error;
pub mod observer;
pub mod reservation;
pub mod schedule;
pub mod solver;

#[cfg(test)]
mod tests;

pub use conflict::{first_conflict, Conflict, ConflictKind};
pub use coordinator::Coordinator;
pub use error::{SolveError, SolveResult};
pub use observer::{NoopObserver, SolveObserver};
pub use reservation::ReservationPlanner;
pub use schedule::{AgentTask, Schedule};
pub use solver::{solve, SolverConfig, Strategy};
