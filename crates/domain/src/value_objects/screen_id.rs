//! Screen identifier for matching accessibility events to a target screen

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A fully-qualified screen (activity/window) identifier as reported by the
/// host, e.g. `"com.example.chat.TextPreview"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(String);

impl ScreenId {
    /// Create a screen id from a host-reported class name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidScreenId` if the identifier is empty or
    /// all whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidScreenId(
                "screen id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ScreenId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
