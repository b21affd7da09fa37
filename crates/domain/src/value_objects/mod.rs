//! Value Objects - Immutable, identity-less domain primitives

mod screen_id;
mod widget_class;

pub use screen_id::ScreenId;
pub use widget_class::WidgetClass;
