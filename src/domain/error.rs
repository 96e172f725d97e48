//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed trees or invalid grid requests.
/// They are raised at construction time or at the `build_grid` boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("branch has no children")]
    EmptyBranch,

    #[error("column group has no columns: {header}")]
    EmptyGroup { header: String },

    #[error("cannot build a grid from an empty forest")]
    EmptyForest,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
