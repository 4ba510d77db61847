//! `mapf-search` — constraint-aware single-agent path search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`constraint`]| `ConstraintTable` (forbidden cell/step pairs),        |
//! |               | `ReservedEdges` (closed directed edges)               |
//! | [`path`]      | `Path` (cell sequence indexed by step)                |
//! | [`astar`]     | `SpaceTimePlanner` trait, `WeightedAStar`             |
//! | [`error`]     | `SearchError`, `SearchResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod astar;
pub mod constraint;
pub mod error;
pub mod path;


pub use astar::{SpaceTimePlanner, WeightedAStar};
pub use constraint::{ConstraintTable, ReservedEdges};
pub use error::{SearchError, SearchResult};
pub use path::Path;
