//! Reading service
//!
//! Orchestrates the full event-to-speech path: filter the host event
//! stream, locate a speakable text node in the window snapshot, and hand
//! its text to the dispatch controller. The service never returns an
//! error to the host; everything that can go wrong ends in a diagnostics
//! entry and silence.

use domain::entities::UiEvent;
use domain::value_objects::{ScreenId, WidgetClass};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::services::{DispatchController, DispatchOutcome, EventFilter, SearchStrategy, TextLocator};

/// Configuration for the reading service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingConfig {
    /// Screen whose window-state changes trigger reading
    pub target_screen: ScreenId,
    /// Widget class holding the text to read
    pub target_widget: WidgetClass,
    /// How the element tree is searched
    #[serde(default)]
    pub strategy: SearchStrategy,
}

impl ReadingConfig {
    /// Create a config with the default search strategy
    pub const fn new(target_screen: ScreenId, target_widget: WidgetClass) -> Self {
        Self {
            target_screen,
            target_widget,
            strategy: SearchStrategy::FirstChildOnly,
        }
    }

    /// Parse a config from raw screen and widget identifiers
    pub fn parse(target_screen: &str, target_widget: &str) -> Result<Self, ApplicationError> {
        Ok(Self::new(
            ScreenId::new(target_screen)?,
            WidgetClass::new(target_widget)?,
        ))
    }

    /// Select the search strategy (builder style)
    #[must_use]
    pub const fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// The event-to-speech orchestrator
#[derive(Debug)]
pub struct ReadingService {
    filter: EventFilter,
    locator: TextLocator,
    dispatcher: DispatchController,
}

impl ReadingService {
    /// Wire the pipeline from a config and a dispatch controller
    pub fn new(config: ReadingConfig, dispatcher: DispatchController) -> Self {
        Self {
            filter: EventFilter::new(config.target_screen),
            locator: TextLocator::new(config.target_widget).with_strategy(config.strategy),
            dispatcher,
        }
    }

    /// Handle one host-delivered UI event
    ///
    /// Returns `None` when the event does not pass the filter or no
    /// speakable node is found; the locator runs only for events that
    /// passed the filter. Otherwise returns the dispatch outcome for the
    /// discovered text.
    #[instrument(skip(self, event), fields(kind = ?event.kind, screen = %event.screen))]
    pub async fn handle_event(&self, event: &UiEvent) -> Option<DispatchOutcome> {
        if !self.filter.matches(event) {
            return None;
        }

        let node = self.locator.find_speakable(event.root.as_ref())?;
        let text = node.text.as_deref().unwrap_or_default();
        debug!(text_len = text.len(), "Speakable node located");
        Some(self.dispatcher.dispatch(text).await)
    }

    /// Interrupt any in-flight synthesis and release the engine
    pub async fn interrupt(&self) {
        self.dispatcher.interrupt().await;
    }

    /// Release the engine on service teardown
    pub async fn shutdown(&self) {
        self.dispatcher.shutdown().await;
    }

    /// The dispatch controller this service drives
    pub const fn dispatcher(&self) -> &DispatchController {
        &self.dispatcher
    }
}
