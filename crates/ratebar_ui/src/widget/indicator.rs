//! Read-only rating display.

use super::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
use super::rating_bar::sized;
use crate::input::InputState;
use crate::layout::bar_size;
use crate::render::{render_rating, ItemBuilder, RenderCommand};
use crate::style::{RatingStyle, Theme};
use ratebar_core::{RatingConfig, RatingIndicator, RatingResult};

/// Shows a rating without accepting edits.
pub struct RatingBarIndicator {
    state: WidgetState,
    indicator: RatingIndicator,
    theme: Theme,
    builder: Box<dyn ItemBuilder>,
}

impl RatingBarIndicator {
    /// Creates an indicator.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or a negative/non-finite value.
    pub fn new(
        id: WidgetId,
        config: RatingConfig,
        value: f64,
        style: RatingStyle,
        theme: &Theme,
        builder: impl ItemBuilder + 'static,
    ) -> RatingResult<Self> {
        let theme = style.resolve(theme);
        let indicator = RatingIndicator::new(sized(config, &theme)?, value)?;
        Ok(Self {
            state: WidgetState::new(id),
            indicator,
            theme,
            builder: Box::new(builder),
        })
    }

    /// Replaces the shown value.
    ///
    /// # Errors
    ///
    /// Fails on a negative or non-finite value.
    pub fn set_value(&mut self, value: f64) -> RatingResult<()> {
        self.indicator.set_value(value)?;
        self.state.mark_dirty();
        Ok(())
    }

    /// Shown value, clamped to the configured bounds.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.indicator.value()
    }
}

impl Widget for RatingBarIndicator {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        let inside = self.state.rect.contains(input.mouse_x, input.mouse_y);
        if inside != self.state.is_hovered() {
            self.state.flags.assign(WidgetFlags::HOVERED, inside);
            response.hovered = inside;
            response.unhovered = !inside;
        }
        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        if !self.state.is_visible() {
            return;
        }

        render_rating(
            commands,
            self.state.rect,
            self.indicator.visual_value(),
            self.builder.as_ref(),
            &self.theme,
            self.indicator.config(),
        );
    }

    fn min_size(&self) -> (f32, f32) {
        bar_size(self.indicator.config())
    }
}
