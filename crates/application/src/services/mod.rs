//! Application services

mod dispatcher;
mod event_filter;
mod reading_service;
mod text_locator;

pub use dispatcher::{DispatchController, DispatchOutcome};
pub use event_filter::EventFilter;
pub use reading_service::{ReadingConfig, ReadingService};
pub use text_locator::{MAX_SEARCH_DEPTH, SearchStrategy, TextLocator};
