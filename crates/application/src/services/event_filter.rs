//! UI event filter
//!
//! The host emits a high-frequency event stream for many apps and screens.
//! Filtering early bounds the work the text locator does per event: only
//! window-state changes originating from the configured target screen pass
//! through. The filter is stateless and memoryless; rejected events are
//! discarded synchronously, never queued.

use domain::entities::{UiEvent, UiEventKind};
use domain::value_objects::ScreenId;
use tracing::trace;

/// Stateless filter over host-delivered UI events
#[derive(Debug, Clone)]
pub struct EventFilter {
    target_screen: ScreenId,
}

impl EventFilter {
    /// Create a filter for the given target screen
    pub fn new(target_screen: ScreenId) -> Self {
        Self { target_screen }
    }

    /// The screen this filter passes events for
    pub fn target_screen(&self) -> &ScreenId {
        &self.target_screen
    }

    /// Whether the event should be processed further
    ///
    /// Passes only events whose kind is a window-state change and whose
    /// originating screen exactly equals the target screen.
    pub fn matches(&self, event: &UiEvent) -> bool {
        let matched = event.kind == UiEventKind::WindowStateChanged
            && event.screen == self.target_screen;
        if !matched {
            trace!(kind = ?event.kind, screen = %event.screen, "Event discarded");
        }
        matched
    }
}
