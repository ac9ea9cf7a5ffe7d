//! `wf-core` — foundational types for the `wayfinder` routing framework.
//!
//! This crate is a dependency of every other `wf-*` crate.  It intentionally
//! has no `wf-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                               |
//! |-----------|----------------------------------------|
//! | [`ids`]   | `LocationId`, `EdgeId`                 |
//! | [`point`] | `MapPoint`, Euclidean distance         |
//! | [`error`] | `WfError`, `WfResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod point;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WfError, WfResult};
pub use ids::{EdgeId, LocationId};
pub use point::MapPoint;
