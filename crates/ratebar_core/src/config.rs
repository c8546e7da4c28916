//! # Rating Configuration
//!
//! The caller supplies a [`RatingConfig`] on every update; the engine never
//! mutates it. Configs can be built in code with the `with_*` builders or
//! loaded from TOML:
//!
//! ```toml
//! item_count = 5
//! max_rating = 10.0
//! step = 0.5
//! gesture_mode = "tap_and_drag"
//! text_direction = "rtl"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{RatingError, RatingResult};
use crate::geometry::ItemLayout;
use crate::snap::Bounds;

/// Which pointer gestures may change the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureMode {
    /// Press selects; movement is ignored for the whole session.
    Tap,
    /// Movement selects; the press only opens the session.
    Drag,
    /// Both paths are enabled.
    #[default]
    TapAndDrag,
    /// The control ignores all pointer input.
    #[serde(rename = "none")]
    Disabled,
}

impl GestureMode {
    /// Returns true if a press commits its own value.
    #[inline]
    #[must_use]
    pub const fn allows_tap(self) -> bool {
        matches!(self, Self::Tap | Self::TapAndDrag)
    }

    /// Returns true if pointer movement updates the value.
    #[inline]
    #[must_use]
    pub const fn allows_drag(self) -> bool {
        matches!(self, Self::Drag | Self::TapAndDrag)
    }

    /// Returns true unless the mode is [`GestureMode::Disabled`].
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Main axis along which items are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Items run along x.
    #[default]
    Horizontal,
    /// Items run along y.
    Vertical,
}

/// Growth direction of a vertical bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalDirection {
    /// Item 0 at the top.
    #[default]
    Down,
    /// Item 0 at the bottom.
    Up,
}

/// Reading direction of a horizontal bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    /// Item 0 on the left.
    #[default]
    Ltr,
    /// Item 0 on the right.
    Rtl,
}

/// Configuration for a rating control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Number of rendered items.
    pub item_count: u32,
    /// Lowest committable value.
    pub min_rating: f64,
    /// Highest value; `None` means `item_count`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<f64>,
    /// Quantization step; zero means continuous.
    pub step: f64,
    /// Tapping the current value again resets to the minimum.
    pub allow_clear: bool,
    /// Which pointer gestures are honored.
    pub gesture_mode: GestureMode,
    /// Layout axis.
    pub direction: Direction,
    /// Growth direction when vertical.
    pub vertical_direction: VerticalDirection,
    /// Reading direction when horizontal.
    pub text_direction: TextDirection,
    /// Item extent along the main axis.
    pub item_size: f64,
    /// Gap between adjacent items.
    pub spacing: f64,
    /// Pointer hover previews the value under the cursor.
    pub hover_enabled: bool,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            item_count: Self::DEFAULT_ITEM_COUNT,
            min_rating: 0.0,
            max_rating: None,
            step: 1.0,
            allow_clear: true,
            gesture_mode: GestureMode::TapAndDrag,
            direction: Direction::Horizontal,
            vertical_direction: VerticalDirection::Down,
            text_direction: TextDirection::Ltr,
            item_size: Self::DEFAULT_ITEM_SIZE,
            spacing: Self::DEFAULT_SPACING,
            hover_enabled: false,
        }
    }
}

impl RatingConfig {
    /// Default number of items.
    pub const DEFAULT_ITEM_COUNT: u32 = 5;
    /// Default item extent.
    pub const DEFAULT_ITEM_SIZE: f64 = 40.0;
    /// Default gap between items.
    pub const DEFAULT_SPACING: f64 = 0.0;

    /// Creates a config with `item_count` items and defaults elsewhere.
    #[must_use]
    pub fn new(item_count: u32) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }

    /// Parses and validates a TOML config.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidConfig`] for malformed TOML, or the
    /// specific violation reported by [`RatingConfig::validate`].
    pub fn from_toml_str(source: &str) -> RatingResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| RatingError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the minimum rating.
    #[must_use]
    pub const fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Sets an explicit maximum rating.
    #[must_use]
    pub const fn with_max_rating(mut self, max_rating: f64) -> Self {
        self.max_rating = Some(max_rating);
        self
    }

    /// Sets the quantization step.
    #[must_use]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Enables or disables tap-to-clear.
    #[must_use]
    pub const fn with_allow_clear(mut self, allow_clear: bool) -> Self {
        self.allow_clear = allow_clear;
        self
    }

    /// Sets the gesture mode.
    #[must_use]
    pub const fn with_gesture_mode(mut self, gesture_mode: GestureMode) -> Self {
        self.gesture_mode = gesture_mode;
        self
    }

    /// Sets the layout axis.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the vertical growth direction.
    #[must_use]
    pub const fn with_vertical_direction(mut self, vertical_direction: VerticalDirection) -> Self {
        self.vertical_direction = vertical_direction;
        self
    }

    /// Sets the text direction.
    #[must_use]
    pub const fn with_text_direction(mut self, text_direction: TextDirection) -> Self {
        self.text_direction = text_direction;
        self
    }

    /// Sets the item extent.
    #[must_use]
    pub const fn with_item_size(mut self, item_size: f64) -> Self {
        self.item_size = item_size;
        self
    }

    /// Sets the gap between items.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Enables or disables hover preview.
    #[must_use]
    pub const fn with_hover(mut self, hover_enabled: bool) -> Self {
        self.hover_enabled = hover_enabled;
        self
    }

    /// Returns the effective maximum rating.
    #[inline]
    #[must_use]
    pub fn max_rating(&self) -> f64 {
        self.max_rating.unwrap_or(f64::from(self.item_count))
    }

    /// Returns the value bounds.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min_rating, self.max_rating())
    }

    /// Returns the layout subset used for hit testing.
    #[must_use]
    pub fn layout(&self) -> ItemLayout {
        ItemLayout {
            item_count: self.item_count,
            item_size: self.item_size,
            spacing: self.spacing,
            direction: self.direction,
            vertical_direction: self.vertical_direction,
            text_direction: self.text_direction,
        }
    }

    /// Returns true if the reading direction runs against the axis.
    ///
    /// Horizontal RTL and vertical bottom-up bars are reversed.
    #[inline]
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.layout().is_reversed()
    }

    /// Checks every configuration contract.
    ///
    /// # Errors
    ///
    /// Returns the first violated contract.
    pub fn validate(&self) -> RatingResult<()> {
        if self.item_count == 0 {
            return Err(RatingError::InvalidItemCount(self.item_count));
        }

        for (field, value) in [
            ("min_rating", self.min_rating),
            ("max_rating", self.max_rating()),
            ("step", self.step),
            ("item_size", self.item_size),
            ("spacing", self.spacing),
        ] {
            if !value.is_finite() {
                return Err(RatingError::NonFinite { field });
            }
        }

        if self.step < 0.0 {
            return Err(RatingError::NegativeStep(self.step));
        }
        if self.min_rating < 0.0 {
            return Err(RatingError::NegativeMinRating(self.min_rating));
        }

        let max = self.max_rating();
        if max <= 0.0 {
            return Err(RatingError::NonPositiveMaxRating(max));
        }
        if self.min_rating > max {
            return Err(RatingError::InvertedBounds {
                min: self.min_rating,
                max,
            });
        }

        if self.item_size <= 0.0 {
            return Err(RatingError::InvalidItemSize(self.item_size));
        }
        if self.spacing < 0.0 {
            return Err(RatingError::NegativeSpacing(self.spacing));
        }

        Ok(())
    }
}
