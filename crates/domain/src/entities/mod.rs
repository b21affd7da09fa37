//! Domain entities - Objects with identity and lifecycle

mod ui_event;
mod ui_node;
mod utterance;

pub use ui_event::{UiEvent, UiEventKind};
pub use ui_node::UiNode;
pub use utterance::{Utterance, UtteranceStatus};
