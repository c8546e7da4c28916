//! Layout of rating items in screen space.

use ratebar_core::{Direction, Point, RatingConfig, Size};

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Converts a screen position to coordinates local to this rect.
    #[must_use]
    pub fn to_local(&self, x: f32, y: f32) -> Point {
        Point::new(f64::from(x - self.x), f64::from(y - self.y))
    }

    /// Returns the size as the engine sees it.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Preferred `(width, height)` of a bar: its items plus gaps, one item thick.
#[must_use]
pub fn bar_size(config: &RatingConfig) -> (f32, f32) {
    let along = config.layout().total_extent() as f32;
    let across = config.item_size as f32;
    match config.direction {
        Direction::Horizontal => (along, across),
        Direction::Vertical => (across, along),
    }
}

/// Screen rectangles of every item, in index order.
///
/// Item 0 sits at the reading start: right edge for RTL, bottom for
/// bottom-up bars.
#[must_use]
pub fn item_rects(bounds: Rect, config: &RatingConfig) -> Vec<Rect> {
    let layout = config.layout();
    let size = config.item_size as f32;
    let stride = layout.stride() as f32;
    let extent = layout.total_extent() as f32;
    let reversed = layout.is_reversed();

    (0..config.item_count)
        .map(|index| {
            let mut offset = index as f32 * stride;
            if reversed {
                offset = extent - offset - size;
            }
            match config.direction {
                Direction::Horizontal => Rect::new(bounds.x + offset, bounds.y, size, size),
                Direction::Vertical => Rect::new(bounds.x, bounds.y + offset, size, size),
            }
        })
        .collect()
}

/// The part of `item` covered by a fill fraction, growing from the reading
/// start.
#[must_use]
pub fn fill_rect(item: Rect, fill: f32, config: &RatingConfig) -> Rect {
    let fill = fill.clamp(0.0, 1.0);
    let reversed = config.is_reversed();
    match config.direction {
        Direction::Horizontal => {
            let width = item.width * fill;
            let x = if reversed { item.right() - width } else { item.x };
            Rect::new(x, item.y, width, item.height)
        }
        Direction::Vertical => {
            let height = item.height * fill;
            let y = if reversed { item.bottom() - height } else { item.y };
            Rect::new(item.x, y, item.width, height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratebar_core::{TextDirection, VerticalDirection};

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(50.0, 30.0));
        assert!(!rect.contains(5.0, 30.0));
        assert!(!rect.contains(50.0, 80.0));
    }

    #[test]
    fn test_to_local() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.to_local(15.0, 30.0), Point::new(5.0, 10.0));
    }

    #[test]
    fn test_item_rects_ltr() {
        let config = RatingConfig::new(3).with_item_size(30.0).with_spacing(10.0);
        let rects = item_rects(Rect::new(0.0, 0.0, 110.0, 30.0), &config);

        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].x, 0.0);
        assert_eq!(rects[1].x, 40.0);
        assert_eq!(rects[2].x, 80.0);
    }

    #[test]
    fn test_item_rects_rtl() {
        let config = RatingConfig::new(3)
            .with_item_size(30.0)
            .with_spacing(10.0)
            .with_text_direction(TextDirection::Rtl);
        let rects = item_rects(Rect::new(100.0, 0.0, 110.0, 30.0), &config);

        assert_eq!(rects[0].x, 180.0);
        assert_eq!(rects[2].x, 100.0);
    }

    #[test]
    fn test_item_rects_bottom_up() {
        let config = RatingConfig::new(2)
            .with_item_size(20.0)
            .with_direction(Direction::Vertical)
            .with_vertical_direction(VerticalDirection::Up);
        let rects = item_rects(Rect::new(0.0, 0.0, 20.0, 40.0), &config);

        assert_eq!(rects[0].y, 20.0);
        assert_eq!(rects[1].y, 0.0);
        assert_eq!(bar_size(&config), (20.0, 40.0));
    }

    #[test]
    fn test_fill_rect_follows_reading_direction() {
        let item = Rect::new(40.0, 0.0, 40.0, 40.0);

        let ltr = fill_rect(item, 0.25, &RatingConfig::new(5));
        assert_eq!(ltr, Rect::new(40.0, 0.0, 10.0, 40.0));

        let rtl = fill_rect(
            item,
            0.25,
            &RatingConfig::new(5).with_text_direction(TextDirection::Rtl),
        );
        assert_eq!(rtl, Rect::new(70.0, 0.0, 10.0, 40.0));
    }
}
