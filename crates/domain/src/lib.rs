//! Domain layer for ReadAloud
//!
//! Contains the core model of the screen-reading service: the UI element
//! tree snapshot handed over by the host, the accessibility events that
//! drive the service, the utterance lifecycle, and the value objects that
//! identify screens and widgets. This layer has no IO and defines the
//! ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
