//! `wf-spatial` — location sets, proximity graph construction, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`locations`] | `Location`, `LocationSet` (R-tree spatial index)       |
//! | [`network`]   | `RoadGraph` (CSR), `GraphConfig`, `build_graph`        |
//! | [`router`]    | `Router` trait, `PathResult`, `DijkstraRouter`         |
//! | [`loader`]    | `load_locations_csv` / `load_locations_reader`         |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                     |
//!
//! # Lifecycle
//!
//! A [`LocationSet`] is built once from static input; [`build_graph`] derives
//! a [`RoadGraph`] from it once; both are immutable afterwards.  Routing
//! queries allocate their own working state, so a shared `&RoadGraph` can
//! serve any number of concurrent queries.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod loader;
pub mod locations;
pub mod network;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use loader::{load_locations_csv, load_locations_reader};
pub use locations::{Location, LocationSet};
pub use network::{build_graph, GraphConfig, RoadGraph};
pub use router::{shortest_path, DijkstraRouter, PathResult, Router};
