//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised when domain invariants are violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stored status code does not map to any known enrollment status.
    #[error("Invalid enrollment status code: {0}")]
    InvalidStatus(i64),
}
