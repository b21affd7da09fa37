//! UI element-tree node
//!
//! A `UiNode` is one node of the snapshot of the active window's element
//! tree that the host exposes read-only per query. The host creates and
//! destroys the underlying accessibility nodes; this model is a plain
//! owned copy taken at query time and is never persisted by the service.

use serde::{Deserialize, Serialize};

use crate::value_objects::WidgetClass;

/// One node of the host's current on-screen element tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiNode {
    /// Widget type identifier reported by the host
    pub class: WidgetClass,
    /// Text carried by the node, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Ordered child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<UiNode>,
}

impl UiNode {
    /// Create a leaf node without text
    pub fn new(class: WidgetClass) -> Self {
        Self {
            class,
            text: None,
            children: Vec::new(),
        }
    }

    /// Set the node's text (builder style)
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append child nodes (builder style)
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// First child in host order, if any
    pub fn first_child(&self) -> Option<&Self> {
        self.children.first()
    }

    /// Whether the node carries non-empty text
    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Depth of the subtree rooted at this node (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Self::depth)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in the subtree rooted at this node
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}
