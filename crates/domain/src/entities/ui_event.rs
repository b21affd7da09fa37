//! Accessibility event delivered by the host

use serde::{Deserialize, Serialize};

use crate::entities::UiNode;
use crate::value_objects::ScreenId;

/// Kind of UI change the host is notifying about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEventKind {
    /// A new window or screen became active
    WindowStateChanged,
    /// Content inside the active window changed
    WindowContentChanged,
    /// A view was clicked
    ViewClicked,
    /// A view received input focus
    ViewFocused,
    /// A notification was posted
    Notification,
    /// Any other event kind the host may deliver
    Other,
}

/// A host-delivered UI-change notification
///
/// Carries the event kind, the identifier of the originating screen, and a
/// snapshot of the active window's element-tree root. The root may be
/// absent when the window changed between the event and the tree query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiEvent {
    /// What changed
    pub kind: UiEventKind,
    /// Screen the event originated from
    pub screen: ScreenId,
    /// Root of the active window's element tree at query time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<UiNode>,
}

impl UiEvent {
    /// Create an event without a tree snapshot
    pub fn new(kind: UiEventKind, screen: ScreenId) -> Self {
        Self {
            kind,
            screen,
            root: None,
        }
    }

    /// Attach the active window root (builder style)
    #[must_use]
    pub fn with_root(mut self, root: UiNode) -> Self {
        self.root = Some(root);
        self
    }
}
