//! # RATEBAR Core
//!
//! The value/interaction engine behind an interactive rating bar and its
//! read-only indicator.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        RATING CONTROL                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  PointerEvent → Geometry → Snap/Clamp → Session → Reconciler │
//! │  KeyAction  ─────────────→ Keyboard ───────────→ Reconciler  │
//! │                                                     ↓        │
//! │                              RatingEvent → hooks + fills     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contracts
//!
//! - Configuration violations fail fast with [`RatingError`].
//! - Values produced by input or geometry are clamped, never rejected.
//! - Everything runs synchronously on the caller's thread.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod control;
pub mod error;
pub mod events;
pub mod geometry;
pub mod indicator;
pub mod keyboard;
pub mod reconcile;
pub mod session;
pub mod snap;

pub use config::{Direction, GestureMode, RatingConfig, TextDirection, VerticalDirection};
pub use control::RatingControl;
pub use error::{RatingError, RatingResult};
pub use events::{PointerEvent, RatingEvent, RatingHooks};
pub use geometry::{item_fill, value_to_visual, visual_to_value, ItemLayout, Point, Size};
pub use indicator::RatingIndicator;
pub use keyboard::{ArrowKey, KeyAction};
pub use reconcile::{SourceMode, ValueReconciler, ValueSource};
pub use session::{GestureKind, InteractionMachine, InteractionSession, Phase};
pub use snap::{Bounds, SnapMode};
