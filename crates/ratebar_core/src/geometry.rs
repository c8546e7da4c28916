//! # Geometry Mapper
//!
//! Converts a pointer position into a continuous rating in two stages:
//!
//! ```text
//! pointer (local) ──► main-axis position ──► index + fraction ──► value
//!                     (mirrored if RTL/up)    (visual units)       (× max / count)
//! ```
//!
//! Working in visual units first means spacing gaps hit-test as the item
//! before them, and `max_rating != item_count` is handled by one scale.

use crate::config::{Direction, TextDirection, VerticalDirection};

/// A position in the control's local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the control's container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
}

impl Size {
    /// A zero-sized container.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Layout parameters needed for hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    /// Number of items.
    pub item_count: u32,
    /// Item extent along the main axis.
    pub item_size: f64,
    /// Gap between items.
    pub spacing: f64,
    /// Main axis.
    pub direction: Direction,
    /// Growth direction when vertical.
    pub vertical_direction: VerticalDirection,
    /// Reading direction when horizontal.
    pub text_direction: TextDirection,
}

impl ItemLayout {
    /// Distance from the start of one item to the start of the next.
    #[inline]
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.item_size + self.spacing
    }

    /// Sum of all item extents and the gaps between them.
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        let count = f64::from(self.item_count);
        self.item_size * count + self.spacing * (count - 1.0).max(0.0)
    }

    /// Returns true if item 0 sits at the far end of the main axis.
    #[inline]
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        match self.direction {
            Direction::Horizontal => self.text_direction == TextDirection::Rtl,
            Direction::Vertical => self.vertical_direction == VerticalDirection::Up,
        }
    }

    /// Maps a pointer position to a visual value in `[0, item_count]`.
    #[must_use]
    pub fn visual_at(&self, position: Point, container: Size) -> f64 {
        let count = f64::from(self.item_count);
        if self.item_count == 0 {
            return 0.0;
        }

        let (along, container_extent) = match self.direction {
            Direction::Horizontal => (position.x, container.width),
            Direction::Vertical => (position.y, container.height),
        };

        let mut extent = self.total_extent();
        if !is_usable(extent) {
            extent = container_extent;
        }
        if !is_usable(extent) {
            return 0.0;
        }

        let along = if along.is_nan() { 0.0 } else { along };
        let along = if self.is_reversed() { extent - along } else { along };
        let along = along.clamp(0.0, extent);

        let stride = self.stride();
        let visual = if is_usable(stride) && is_usable(self.item_size) {
            let index = (along / stride).floor().clamp(0.0, count - 1.0);
            let within = along - index * stride;
            index + (within / self.item_size).clamp(0.0, 1.0)
        } else {
            along / extent * count
        };

        visual.clamp(0.0, count)
    }

    /// Maps a pointer position to a raw (unsnapped) value in `[0, max_rating]`.
    #[must_use]
    pub fn raw_value_at(&self, position: Point, container: Size, max_rating: f64) -> f64 {
        visual_to_value(self.visual_at(position, container), self.item_count, max_rating)
    }
}

#[inline]
fn is_usable(extent: f64) -> bool {
    extent.is_finite() && extent > 0.0
}

/// Converts item units to a rating value.
#[inline]
#[must_use]
pub fn visual_to_value(visual: f64, item_count: u32, max_rating: f64) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    visual / f64::from(item_count) * max_rating
}

/// Converts a rating value to item units.
#[inline]
#[must_use]
pub fn value_to_visual(value: f64, item_count: u32, max_rating: f64) -> f64 {
    if max_rating <= 0.0 {
        return 0.0;
    }
    value / max_rating * f64::from(item_count)
}

/// Fill fraction of item `index` for a visual value.
#[inline]
#[must_use]
pub fn item_fill(visual: f64, index: u32) -> f64 {
    (visual - f64::from(index)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RatingConfig;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn horizontal(count: u32, size: f64, spacing: f64) -> ItemLayout {
        RatingConfig::new(count)
            .with_item_size(size)
            .with_spacing(spacing)
            .layout()
    }

    #[test]
    fn test_total_extent() {
        assert!(close(horizontal(5, 40.0, 4.0).total_extent(), 216.0));
        assert!(close(horizontal(1, 40.0, 4.0).total_extent(), 40.0));
    }

    #[test]
    fn test_visual_at_item_boundaries() {
        let layout = horizontal(5, 40.0, 0.0);
        let container = Size::new(200.0, 40.0);

        assert!(close(layout.visual_at(Point::new(0.0, 20.0), container), 0.0));
        assert!(close(layout.visual_at(Point::new(20.0, 20.0), container), 0.5));
        assert!(close(layout.visual_at(Point::new(120.0, 20.0), container), 3.0));
        assert!(close(layout.visual_at(Point::new(200.0, 20.0), container), 5.0));
    }

    #[test]
    fn test_visual_clamps_outside_extent() {
        let layout = horizontal(5, 40.0, 0.0);
        let container = Size::new(200.0, 40.0);

        assert!(close(layout.visual_at(Point::new(-30.0, 0.0), container), 0.0));
        assert!(close(layout.visual_at(Point::new(900.0, 0.0), container), 5.0));
        assert!(close(layout.visual_at(Point::new(f64::NAN, 0.0), container), 0.0));
    }

    #[test]
    fn test_gap_attributed_to_preceding_item() {
        let layout = horizontal(5, 40.0, 10.0);
        let container = Size::new(layout.total_extent(), 40.0);

        let trailing_edge = layout.visual_at(Point::new(40.0, 0.0), container);
        let in_gap = layout.visual_at(Point::new(45.0, 0.0), container);
        let gap_end = layout.visual_at(Point::new(49.999, 0.0), container);

        assert!(close(trailing_edge, 1.0));
        assert!(close(in_gap, trailing_edge));
        assert!(close(gap_end, trailing_edge));
        assert!(close(layout.visual_at(Point::new(240.0, 0.0), container), 5.0));
    }

    #[test]
    fn test_rtl_mirrors() {
        let layout = RatingConfig::new(5)
            .with_text_direction(TextDirection::Rtl)
            .layout();
        let container = Size::new(200.0, 40.0);

        assert!(close(layout.visual_at(Point::new(0.0, 0.0), container), 5.0));
        assert!(close(layout.visual_at(Point::new(200.0, 0.0), container), 0.0));
        assert!(close(layout.visual_at(Point::new(150.0, 0.0), container), 1.25));
    }

    #[test]
    fn test_vertical_uses_y_axis() {
        let down = RatingConfig::new(4).with_direction(Direction::Vertical).layout();
        let up = RatingConfig::new(4)
            .with_direction(Direction::Vertical)
            .with_vertical_direction(VerticalDirection::Up)
            .layout();
        let container = Size::new(40.0, 160.0);

        assert!(close(down.visual_at(Point::new(999.0, 40.0), container), 1.0));
        assert!(close(up.visual_at(Point::new(999.0, 40.0), container), 3.0));
        assert!(close(up.visual_at(Point::new(0.0, 160.0), container), 0.0));
    }

    #[test]
    fn test_degenerate_extent_falls_back_to_container() {
        let layout = ItemLayout {
            item_count: 4,
            item_size: 0.0,
            spacing: 0.0,
            direction: Direction::Horizontal,
            vertical_direction: VerticalDirection::Down,
            text_direction: TextDirection::Ltr,
        };

        assert!(close(layout.visual_at(Point::new(50.0, 0.0), Size::new(100.0, 10.0)), 2.0));
        assert!(close(layout.visual_at(Point::new(50.0, 0.0), Size::ZERO), 0.0));
    }

    #[test]
    fn test_raw_value_scales_to_max() {
        let layout = horizontal(5, 40.0, 0.0);
        let raw = layout.raw_value_at(Point::new(120.0, 0.0), Size::new(200.0, 40.0), 10.0);
        assert!(close(raw, 6.0));
    }

    #[test]
    fn test_visual_value_round_trip() {
        for value in [0.0, 0.3, 1.0, 2.5, 3.75, 9.99, 10.0] {
            let visual = value_to_visual(value, 5, 10.0);
            assert!(close(visual_to_value(visual, 5, 10.0), value));
        }
    }

    #[test]
    fn test_item_fill() {
        assert!(close(item_fill(2.5, 0), 1.0));
        assert!(close(item_fill(2.5, 2), 0.5));
        assert!(close(item_fill(2.5, 3), 0.0));
    }
}
