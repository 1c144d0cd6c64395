//! Tree-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Errors raised by tree construction, lookup, and comparison.
/// Every operation is deterministic, so none of these are retryable.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("malformed fixture at line {line}: {reason}")]
    MalformedFixture { line: usize, reason: String },

    #[error("no child matching {segment:?} at depth {depth}")]
    PathNotFound { segment: String, depth: usize },

    #[error("no node with content {0:?} in subtree")]
    ContentNotFound(String),

    #[error("trees diverge at {path}: {reason}")]
    ComparisonMismatch { path: String, reason: String },

    #[error("node not present in arena: {0:?}")]
    NodeNotFound(Index),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
