//! Render command generation for rating items.
//!
//! Each item is drawn as its empty visual, then the filled visual clipped to
//! the item's fill fraction. Commands are plain data for the host renderer.

use crate::layout::{fill_rect, item_rects, Rect};
use crate::style::{Color, Theme};
use ratebar_core::{item_fill, RatingConfig};

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
    },
    /// Icon from atlas.
    Icon {
        /// Bounds.
        bounds: Rect,
        /// Icon ID in atlas.
        icon_id: u32,
        /// Tint color.
        color: Color,
    },
    /// Scissor rect (clip following commands).
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
}

/// What to draw for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisual {
    /// Icon ID in atlas.
    pub icon_id: u32,
    /// Tint; `None` uses the style's color for the item's state.
    pub color: Option<Color>,
}

impl ItemVisual {
    /// A visual tinted by the style.
    #[must_use]
    pub const fn icon(icon_id: u32) -> Self {
        Self {
            icon_id,
            color: None,
        }
    }
}

/// Supplies item visuals by index.
///
/// `filled` is called exactly once per item and frame. Without an `empty`
/// visual, the filled one is reused with the empty tint.
pub trait ItemBuilder {
    /// Visual for the filled part of item `index`.
    fn filled(&self, index: u32) -> ItemVisual;

    /// Visual for the unfilled part of item `index`.
    fn empty(&self, _index: u32) -> Option<ItemVisual> {
        None
    }
}

impl<F> ItemBuilder for F
where
    F: Fn(u32) -> ItemVisual,
{
    fn filled(&self, index: u32) -> ItemVisual {
        self(index)
    }
}

/// Emits commands for every item.
///
/// `rects` and `fills` are in index order.
pub fn render_items(
    commands: &mut Vec<RenderCommand>,
    rects: &[Rect],
    fills: impl IntoIterator<Item = f64>,
    builder: &dyn ItemBuilder,
    style: &Theme,
    config: &RatingConfig,
) {
    for ((index, &rect), fill) in (0u32..).zip(rects).zip(fills) {
        let filled = builder.filled(index);
        let empty = builder.empty(index).unwrap_or(filled);

        commands.push(RenderCommand::Icon {
            bounds: rect,
            icon_id: empty.icon_id,
            color: empty.color.unwrap_or(style.empty_color),
        });

        let fill = fill as f32;
        if fill <= 0.0 {
            continue;
        }

        let icon = RenderCommand::Icon {
            bounds: rect,
            icon_id: filled.icon_id,
            color: filled.color.unwrap_or(style.filled_color),
        };
        if fill >= 1.0 {
            commands.push(icon);
        } else {
            commands.push(RenderCommand::PushClip {
                bounds: fill_rect(rect, fill, config),
            });
            commands.push(icon);
            commands.push(RenderCommand::PopClip);
        }
    }
}

/// Emits commands for a whole bar showing `visual` items' worth of fill.
pub fn render_rating(
    commands: &mut Vec<RenderCommand>,
    bounds: Rect,
    visual: f64,
    builder: &dyn ItemBuilder,
    style: &Theme,
    config: &RatingConfig,
) {
    let rects = item_rects(bounds, config);
    let fills = (0..config.item_count).map(|index| item_fill(visual, index));
    render_items(commands, &rects, fills, builder, style, config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const STAR: u32 = 7;
    const STAR_OUTLINE: u32 = 8;

    struct Outlined {
        calls: Cell<u32>,
    }

    impl ItemBuilder for Outlined {
        fn filled(&self, _index: u32) -> ItemVisual {
            self.calls.set(self.calls.get() + 1);
            ItemVisual::icon(STAR)
        }

        fn empty(&self, _index: u32) -> Option<ItemVisual> {
            Some(ItemVisual::icon(STAR_OUTLINE))
        }
    }

    #[test]
    fn test_partial_fill_is_clipped() {
        let config = RatingConfig::new(3);
        let theme = Theme::default();
        let rects = item_rects(Rect::new(0.0, 0.0, 120.0, 40.0), &config);
        let builder = |_: u32| ItemVisual::icon(STAR);

        let mut commands = Vec::new();
        render_items(&mut commands, &rects, [1.0, 0.5, 0.0], &builder, &theme, &config);

        assert_eq!(
            commands,
            vec![
                RenderCommand::Icon { bounds: rects[0], icon_id: STAR, color: theme.empty_color },
                RenderCommand::Icon { bounds: rects[0], icon_id: STAR, color: theme.filled_color },
                RenderCommand::Icon { bounds: rects[1], icon_id: STAR, color: theme.empty_color },
                RenderCommand::PushClip { bounds: Rect::new(40.0, 0.0, 20.0, 40.0) },
                RenderCommand::Icon { bounds: rects[1], icon_id: STAR, color: theme.filled_color },
                RenderCommand::PopClip,
                RenderCommand::Icon { bounds: rects[2], icon_id: STAR, color: theme.empty_color },
            ]
        );
    }

    #[test]
    fn test_builder_called_once_per_item() {
        let config = RatingConfig::new(5);
        let rects = item_rects(Rect::new(0.0, 0.0, 200.0, 40.0), &config);
        let builder = Outlined { calls: Cell::new(0) };

        let mut commands = Vec::new();
        render_items(
            &mut commands,
            &rects,
            [1.0, 1.0, 0.0, 0.0, 0.0],
            &builder,
            &Theme::default(),
            &config,
        );

        assert_eq!(builder.calls.get(), 5);
        assert_eq!(commands.len(), 7);
        assert!(matches!(
            commands[0],
            RenderCommand::Icon { icon_id: STAR_OUTLINE, .. }
        ));
    }

    #[test]
    fn test_render_rating_rtl_fills_from_right() {
        let config = RatingConfig::new(2).with_text_direction(ratebar_core::TextDirection::Rtl);
        let builder = |_: u32| ItemVisual::icon(STAR);

        let mut commands = Vec::new();
        render_rating(
            &mut commands,
            Rect::new(0.0, 0.0, 80.0, 40.0),
            0.5,
            &builder,
            &Theme::default(),
            &config,
        );

        assert!(commands.contains(&RenderCommand::PushClip {
            bounds: Rect::new(60.0, 0.0, 20.0, 40.0)
        }));
    }
}
