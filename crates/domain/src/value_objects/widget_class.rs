//! Widget class identifier for matching element-tree nodes by type

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A widget type identifier as reported by the host for an element-tree
/// node, e.g. `"android.widget.TextView"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetClass(String);

impl WidgetClass {
    /// Create a widget class from a host-reported class name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWidgetClass` if the identifier is empty
    /// or all whitespace.
    pub fn new(class: impl Into<String>) -> Result<Self, DomainError> {
        let class = class.into();
        if class.trim().is_empty() {
            return Err(DomainError::InvalidWidgetClass(
                "widget class must not be empty".to_string(),
            ));
        }
        Ok(Self(class))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for WidgetClass {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
