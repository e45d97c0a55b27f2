//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
///
/// All variants are recoverable; an operation that returns one has not
/// changed any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str, id: u64 },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Duplicate(String),
}

impl DomainError {
    pub fn post_not_found(id: u64) -> Self {
        Self::NotFound {
            entity_type: "Post",
            id,
        }
    }
}
