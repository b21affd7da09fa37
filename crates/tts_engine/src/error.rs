//! Speech-synthesis errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur at the speech-engine boundary
#[derive(Debug, Error)]
pub enum TtsError {
    /// Invalid or incomplete engine configuration; fatal to initialization
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Text exceeds the byte length the engine accepts; request dropped
    #[error("Text too long: {bytes} bytes exceeds maximum of {max} bytes")]
    TextTooLong {
        /// Encoded length of the rejected text
        bytes: usize,
        /// Maximum length the engine accepts
        max: usize,
    },

    /// The engine handle was already released; lifecycle invariant violation
    #[error("Engine already released")]
    EngineReleased,

    /// The engine returned a non-zero status code; recoverable
    #[error("Engine returned status {code} from {operation}")]
    SynthesisStatus {
        /// Engine operation that produced the status
        operation: String,
        /// Vendor status code
        code: i32,
    },

    /// A required resource file does not exist
    #[error("Resource file missing: {}", .0.display())]
    ResourceMissing(PathBuf),

    /// IO failure while provisioning resources
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TtsError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a synthesis status error for an engine operation
    pub fn status(operation: impl Into<String>, code: i32) -> Self {
        Self::SynthesisStatus {
            operation: operation.into(),
            code,
        }
    }

    /// Whether the error is recoverable for the running service
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::TextTooLong { .. } | Self::SynthesisStatus { .. }
        )
    }
}
