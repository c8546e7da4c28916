//! # RATEBAR UI
//!
//! Widgets that put the rating engine on screen.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       WIDGET FRAME                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  InputState → RatingBar → ratebar_core → Render Commands │
//! │      ↓            ↓             ↓               ↓        │
//! │  Hit Testing  Focus/Keys   Value + Fills   Item Builder  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The host owns the frame loop: it fills an [`InputState`], assigns each
//! widget a rectangle, calls [`Widget::update`], then paints the
//! [`RenderCommand`]s from [`Widget::render`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use input::{InputState, Key, MouseButton};
pub use layout::Rect;
pub use render::{ItemBuilder, ItemVisual, RenderCommand};
pub use style::{Color, Cursor, RatingStyle, Theme};
pub use widget::{RatingBar, RatingBarIndicator, Widget, WidgetId, WidgetResponse};
