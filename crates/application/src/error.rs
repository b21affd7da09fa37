//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain validation failed
    #[error("Domain error: {0}")]
    Domain(#[from] domain::DomainError),

    /// Speech-engine boundary failed
    #[error("Speech error: {0}")]
    Speech(#[from] tts_engine::TtsError),
}
