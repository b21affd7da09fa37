//! Application layer for ReadAloud
//!
//! The event-driven text-discovery and speech-dispatch core: filters
//! host-delivered UI events for the configured target screen, searches the
//! element-tree snapshot for a speakable text node, and forwards the text
//! to the speech engine with bounded-length and lifecycle checks.
//!
//! Data flow:
//!
//! ```text
//! host event ──▶ EventFilter ──▶ TextLocator ──▶ DispatchController ──▶ Engine
//! ```

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{DiagnosticsPort, TracingDiagnostics};
pub use services::{
    DispatchController, DispatchOutcome, EventFilter, MAX_SEARCH_DEPTH, ReadingConfig,
    ReadingService, SearchStrategy, TextLocator,
};
