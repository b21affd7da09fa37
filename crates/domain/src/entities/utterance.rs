//! Utterance entity
//!
//! One speech request flowing through the dispatch path, from discovery of
//! a speakable text node to synthesis completion or failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Processing status of an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtteranceStatus {
    /// Text discovered, not yet handed to the engine
    Pending,
    /// Accepted by the synthesis engine
    Speaking,
    /// Synthesis finished
    Spoken,
    /// Synthesis was rejected or failed
    Failed,
}

impl UtteranceStatus {
    /// Check if the status indicates completion
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Spoken | Self::Failed)
    }
}

/// A speech request in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    /// Unique identifier
    pub id: Uuid,
    /// Text to be spoken
    pub text: String,
    /// Current processing status
    pub status: UtteranceStatus,
    /// When the utterance was created
    pub created_at: DateTime<Utc>,
    /// When the utterance was last updated
    pub updated_at: DateTime<Utc>,
    /// Error message if synthesis failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Utterance {
    /// Create a new pending utterance
    pub fn new(text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            status: UtteranceStatus::Pending,
            created_at: now,
            updated_at: now,
            error: None,
        }
    }

    /// Mark the utterance as accepted by the engine
    pub fn start_speaking(&mut self) {
        self.status = UtteranceStatus::Speaking;
        self.updated_at = Utc::now();
    }

    /// Mark the utterance as spoken
    pub fn mark_spoken(&mut self) {
        self.status = UtteranceStatus::Spoken;
        self.updated_at = Utc::now();
    }

    /// Mark the utterance as failed with a reason
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.status = UtteranceStatus::Failed;
        self.error = Some(error.into());
        self.updated_at = Utc::now();
    }
}
