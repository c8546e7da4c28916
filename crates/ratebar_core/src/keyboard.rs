//! # Keyboard Adjuster
//!
//! Discrete actions that change the value without a pointer session.
//! Arrow keys are remapped so "forward" follows the reading direction.

use crate::config::{Direction, RatingConfig, TextDirection, VerticalDirection};
use crate::snap::Bounds;

/// A discrete value adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// One step up.
    Increment,
    /// One step down.
    Decrement,
    /// Jump to the minimum.
    Home,
    /// Jump to the maximum.
    End,
    /// Coarse step up; currently the same size as [`KeyAction::Increment`].
    PageIncrement,
    /// Coarse step down; currently the same size as [`KeyAction::Decrement`].
    PageDecrement,
}

/// Physical arrow keys, before direction remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
}

impl KeyAction {
    /// Maps an arrow key to an action for the configured layout.
    ///
    /// Arrows across the main axis are not mapped.
    #[must_use]
    pub fn from_arrow(arrow: ArrowKey, config: &RatingConfig) -> Option<Self> {
        let forward = match (config.direction, arrow) {
            (Direction::Horizontal, ArrowKey::Right) | (Direction::Vertical, ArrowKey::Up) => true,
            (Direction::Horizontal, ArrowKey::Left) | (Direction::Vertical, ArrowKey::Down) => false,
            _ => return None,
        };

        let reversed = match config.direction {
            Direction::Horizontal => config.text_direction == TextDirection::Rtl,
            // Up increments only when item 0 sits at the bottom.
            Direction::Vertical => config.vertical_direction == VerticalDirection::Down,
        };

        Some(if forward != reversed {
            Self::Increment
        } else {
            Self::Decrement
        })
    }

    /// Applies the action to `current`.
    ///
    /// A continuous config (step 0) steps by one.
    #[must_use]
    pub fn apply(self, current: f64, step: f64, bounds: Bounds) -> f64 {
        let step = if step > 0.0 { step } else { 1.0 };
        match self {
            Self::Increment | Self::PageIncrement => bounds.clamp(current + step),
            Self::Decrement | Self::PageDecrement => bounds.clamp(current - step),
            Self::Home => bounds.effective_min(),
            Self::End => bounds.max,
        }
    }
}
