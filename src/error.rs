//! Error types for the follow graph.

use thiserror::Error;

/// Errors raised by [`FollowGraph`](crate::FollowGraph) mutations.
///
/// Only self-follows are rejected; every other operation is total over
/// its inputs (unknown users and missing edges are no-ops or empty results).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FollowGraphError {
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, FollowGraphError>;
