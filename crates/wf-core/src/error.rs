//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into `WfError`
//! via `From` impls, or keep them separate and wrap `WfError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::LocationId;

/// The top-level error type for `wf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WfError {
    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `wf-*` crates.
pub type WfResult<T> = Result<T, WfError>;
