//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the hierarchy contract.
/// These are independent of CLI and configuration concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("node not found in hierarchy: {0}")]
    NodeNotFound(String),

    #[error("hierarchy already has a root: {0}")]
    RootAlreadySet(String),

    #[error("cannot attach {ancestor} below its own descendant {descendant}")]
    AncestryViolation {
        ancestor: String,
        descendant: String,
    },
}

/// Result type for hierarchy operations.
pub type DomainResult<T> = Result<T, DomainError>;
