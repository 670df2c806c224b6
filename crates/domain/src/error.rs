//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The vulnerability status label is not one of the known choices.
    #[error("unknown vulnerability status: {0}")]
    UnknownVulnerabilityStatus(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
