//! Text locator
//!
//! Searches the active window's element-tree snapshot for a node of the
//! configured target widget class. The search strategy is explicit and
//! named so its behavior is visible and testable rather than an accidental
//! artifact of recursion shape.

use domain::entities::UiNode;
use domain::value_objects::WidgetClass;
use serde::{Deserialize, Serialize};

/// Ceiling on descent depth, guarding against cyclic or adversarial
/// hierarchies a misbehaving host might expose.
pub const MAX_SEARCH_DEPTH: usize = 64;

/// How the element tree is searched for the target widget class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Depth-first, first-child-preference search: descend the first-child
    /// chain only. Misses a target node that is not the first child of
    /// some ancestor, but visits at most `depth` nodes per query. This is
    /// the historical behavior and the default.
    #[default]
    FirstChildOnly,
    /// Full preorder depth-first search over all children, first match
    /// wins. Finds targets anywhere in the tree at the cost of visiting up
    /// to the whole tree.
    AllChildren,
}

/// Locates a speakable text node in an element-tree snapshot
#[derive(Debug, Clone)]
pub struct TextLocator {
    target: WidgetClass,
    strategy: SearchStrategy,
    max_depth: usize,
}

impl TextLocator {
    /// Create a locator for the given widget class with the default
    /// strategy and depth ceiling
    pub fn new(target: WidgetClass) -> Self {
        Self {
            target,
            strategy: SearchStrategy::default(),
            max_depth: MAX_SEARCH_DEPTH,
        }
    }

    /// Select the search strategy (builder style)
    #[must_use]
    pub const fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Override the depth ceiling (builder style)
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The widget class this locator searches for
    pub fn target(&self) -> &WidgetClass {
        &self.target
    }

    /// Search the tree rooted at `root` for the target widget class
    ///
    /// Returns `None` when the root is absent (the window may have changed
    /// since the event was delivered), when no matching node exists along
    /// the searched portion of the tree, or when the depth ceiling is hit.
    /// The root itself is never a candidate; only descendants are
    /// examined.
    pub fn find_speakable<'a>(&self, root: Option<&'a UiNode>) -> Option<&'a UiNode> {
        let root = root?;
        match self.strategy {
            SearchStrategy::FirstChildOnly => self.descend_first_child(root),
            SearchStrategy::AllChildren => self.descend_all(root, 0),
        }
    }

    fn descend_first_child<'a>(&self, root: &'a UiNode) -> Option<&'a UiNode> {
        let mut current = root;
        for _ in 0..self.max_depth {
            let child = current.first_child()?;
            if child.class == self.target {
                return Some(child);
            }
            current = child;
        }
        None
    }

    fn descend_all<'a>(&self, node: &'a UiNode, depth: usize) -> Option<&'a UiNode> {
        if depth >= self.max_depth {
            return None;
        }
        for child in &node.children {
            if child.class == self.target {
                return Some(child);
            }
            if let Some(found) = self.descend_all(child, depth + 1) {
                return Some(found);
            }
        }
        None
    }
}
