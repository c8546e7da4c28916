//! Core widget types and traits.

use crate::input::InputState;
use crate::layout::Rect;
use crate::render::RenderCommand;
use ratebar_core::RatingEvent;

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Widget state flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// Widget has keyboard focus.
    pub const FOCUSED: u32 = 1 << 1;
    /// Pointer is over the widget.
    pub const HOVERED: u32 = 1 << 2;
    /// A pointer session started on the widget and is still open.
    pub const PRESSED: u32 = 1 << 3;
    /// Widget needs redraw.
    pub const DIRTY_RENDER: u32 = 1 << 4;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::DIRTY_RENDER);

    /// Creates new flags with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    pub id: WidgetId,
    /// Bounding rectangle, assigned by the host's layout.
    pub rect: Rect,
    /// State flags.
    pub flags: WidgetFlags,
}

impl WidgetState {
    /// Creates a new widget state.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
            flags: WidgetFlags::DEFAULT,
        }
    }

    /// Returns true if the widget is visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Returns true if the widget has keyboard focus.
    #[inline]
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.flags.has(WidgetFlags::FOCUSED)
    }

    /// Returns true if the widget is hovered.
    #[inline]
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.flags.has(WidgetFlags::HOVERED)
    }

    /// Returns true if the widget is pressed.
    #[inline]
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.flags.has(WidgetFlags::PRESSED)
    }

    /// Marks the widget as needing redraw.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.flags.set(WidgetFlags::DIRTY_RENDER);
    }
}

/// Response from widget update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WidgetResponse {
    /// Widget was clicked.
    pub clicked: bool,
    /// Widget gained focus.
    pub focused: bool,
    /// Widget lost focus.
    pub unfocused: bool,
    /// Widget was hovered (just entered).
    pub hovered: bool,
    /// Widget was unhovered (just left).
    pub unhovered: bool,
    /// A change session started.
    pub started: bool,
    /// Widget value changed.
    pub changed: bool,
    /// A change session ended.
    pub ended: bool,
    /// Latest committed value, when `changed`.
    pub value: Option<f64>,
}

impl WidgetResponse {
    /// Folds engine notifications into the response.
    pub fn absorb(&mut self, events: &[RatingEvent]) {
        for &event in events {
            match event {
                RatingEvent::Started(_) => self.started = true,
                RatingEvent::Changed(value) => {
                    self.changed = true;
                    self.value = Some(value);
                }
                RatingEvent::Ended(_) => self.ended = true,
            }
        }
    }
}

/// Base trait for all widgets.
pub trait Widget {
    /// Returns the widget's state.
    fn state(&self) -> &WidgetState;

    /// Returns mutable access to the widget's state.
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Handles input and updates widget state.
    ///
    /// Called every frame, even without input events.
    fn update(&mut self, input: &InputState) -> WidgetResponse;

    /// Generates render commands for this widget.
    fn render(&self, commands: &mut Vec<RenderCommand>);

    /// Returns the minimum size of this widget.
    fn min_size(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    /// Returns the preferred size of this widget.
    fn preferred_size(&self) -> (f32, f32) {
        self.min_size()
    }
}
