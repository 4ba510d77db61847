//! `mapf-grid` — grid maps and the traversal graph derived from them.
//!
//! # Crate layout
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`map`]   | `GridMap` (passable/blocked cell grid)        |
//! | [`graph`] | `GridGraph` (CSR 4-neighbour adjacency)       |
//! | [`error`] | `GridError`, `GridResult<T>`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `mapf-core` types. |

pub mod error;
pub mod graph;
pub mod map;


pub use error::{GridError, GridResult};
pub use graph::GridGraph;
pub use map::GridMap;
