//! `mapf-core` — foundational types for the mapf grid path-finding engine.
//!
//! This crate is a dependency of every other `mapf-*` crate.  It intentionally
//! has no `mapf-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                  |
//! |----------|-------------------------------------------|
//! | [`ids`]  | `AgentId`, `VertexId`                     |
//! | [`cell`] | `Cell` (row/column grid coordinate)       |
//! | [`step`] | `Step` (discrete schedule time step)      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod ids;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use ids::{AgentId, VertexId};
pub use step::Step;
