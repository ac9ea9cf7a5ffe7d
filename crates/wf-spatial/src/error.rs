//! Spatial-subsystem error type.
//!
//! Note that an unreachable destination is *not* an error: routing reports it
//! through the shape of [`PathResult`](crate::PathResult) instead.

use thiserror::Error;

use wf_core::LocationId;

/// Errors produced by `wf-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("location {0} not found in set")]
    LocationNotFound(LocationId),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
