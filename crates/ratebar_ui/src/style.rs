//! Theme defaults and per-widget overrides.
//!
//! A widget's [`RatingStyle`] only names what the caller wants to change;
//! everything else comes from the [`Theme`].

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Amber, the classic star color.
    pub const AMBER: Self = Self::rgba(1.0, 0.76, 0.03, 1.0);
    /// Neutral gray for unrated items.
    pub const UNRATED: Self = Self::rgba(0.74, 0.74, 0.74, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Pointer cursor shown over a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Platform default arrow.
    #[default]
    Default,
    /// Hand, signalling the widget is clickable.
    Pointer,
}

/// Application-wide defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Item extent.
    pub item_size: f32,
    /// Gap between items.
    pub spacing: f32,
    /// Tint of the filled part of an item.
    pub filled_color: Color,
    /// Tint of the unfilled part of an item.
    pub empty_color: Color,
    /// Cursor over an interactive bar.
    pub cursor: Cursor,
    /// Duration the host should use to animate towards a new value (seconds).
    pub animation_duration: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            item_size: 40.0,
            spacing: 0.0,
            filled_color: Color::AMBER,
            empty_color: Color::UNRATED,
            cursor: Cursor::Pointer,
            animation_duration: 0.15,
        }
    }
}

/// Per-widget overrides; `None` falls back to the theme.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingStyle {
    /// Item extent.
    pub item_size: Option<f32>,
    /// Gap between items.
    pub spacing: Option<f32>,
    /// Filled tint.
    pub filled_color: Option<Color>,
    /// Unfilled tint.
    pub empty_color: Option<Color>,
    /// Cursor over an interactive bar.
    pub cursor: Option<Cursor>,
    /// Animation duration (seconds).
    pub animation_duration: Option<f32>,
}

impl RatingStyle {
    /// Overrides the item extent.
    #[must_use]
    pub const fn with_item_size(mut self, item_size: f32) -> Self {
        self.item_size = Some(item_size);
        self
    }

    /// Overrides the gap between items.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Overrides the filled tint.
    #[must_use]
    pub const fn with_filled_color(mut self, color: Color) -> Self {
        self.filled_color = Some(color);
        self
    }

    /// Overrides the unfilled tint.
    #[must_use]
    pub const fn with_empty_color(mut self, color: Color) -> Self {
        self.empty_color = Some(color);
        self
    }

    /// Overrides the cursor.
    #[must_use]
    pub const fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Overrides the animation duration hint.
    #[must_use]
    pub const fn with_animation_duration(mut self, seconds: f32) -> Self {
        self.animation_duration = Some(seconds);
        self
    }

    /// Fills every unset field from `theme`.
    #[must_use]
    pub fn resolve(&self, theme: &Theme) -> Theme {
        Theme {
            item_size: self.item_size.unwrap_or(theme.item_size),
            spacing: self.spacing.unwrap_or(theme.spacing),
            filled_color: self.filled_color.unwrap_or(theme.filled_color),
            empty_color: self.empty_color.unwrap_or(theme.empty_color),
            cursor: self.cursor.unwrap_or(theme.cursor),
            animation_duration: self.animation_duration.unwrap_or(theme.animation_duration),
        }
    }
}
