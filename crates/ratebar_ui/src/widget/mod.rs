//! Rating widgets.

mod core;
mod indicator;
mod rating_bar;

pub use self::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use indicator::RatingBarIndicator;
pub use rating_bar::RatingBar;
