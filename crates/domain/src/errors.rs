//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid screen identifier
    #[error("Invalid screen id: {0}")]
    InvalidScreenId(String),

    /// Invalid widget class identifier
    #[error("Invalid widget class: {0}")]
    InvalidWidgetClass(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
