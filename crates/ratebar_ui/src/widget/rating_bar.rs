//! Interactive rating bar.
//!
//! Translates frame input into the engine's normalized pointer stream:
//!
//! - left press inside the bar opens a session and takes focus
//! - movement while pressed streams drag positions, even outside the bar
//! - release closes the session; Escape or a platform cancel aborts it
//! - plain movement over the bar previews the value under the pointer
//!
//! Keyboard input is honored only while focused and no pointer session is
//! open.

use super::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
use crate::input::{InputState, Key, MouseButton};
use crate::layout::bar_size;
use crate::render::{render_rating, ItemBuilder, RenderCommand};
use crate::style::{Cursor, RatingStyle, Theme};
use ratebar_core::{
    ArrowKey, KeyAction, PointerEvent, RatingConfig, RatingControl, RatingEvent, RatingResult,
    ValueSource,
};

/// Outline width of the focus ring.
const FOCUS_RING_WIDTH: f32 = 1.0;

/// An editable rating bar.
pub struct RatingBar {
    state: WidgetState,
    control: RatingControl,
    theme: Theme,
    builder: Box<dyn ItemBuilder>,
}

impl RatingBar {
    /// Creates a bar.
    ///
    /// Item size and spacing left at their config defaults come from `style`
    /// resolved against `theme`; explicit values in `config` win.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or value source.
    pub fn new(
        id: WidgetId,
        config: RatingConfig,
        source: ValueSource,
        style: RatingStyle,
        theme: &Theme,
        builder: impl ItemBuilder + 'static,
    ) -> RatingResult<Self> {
        let theme = style.resolve(theme);
        let control = RatingControl::new(sized(config, &theme)?, source)?;
        Ok(Self {
            state: WidgetState::new(id),
            control,
            theme,
            builder: Box::new(builder),
        })
    }

    /// Applies a new configuration and value source.
    ///
    /// Returns the `Ended` notification of a session aborted because the bar
    /// stopped being interactive.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or value source; the bar keeps its
    /// previous state.
    pub fn reconfigure(
        &mut self,
        config: RatingConfig,
        source: ValueSource,
    ) -> RatingResult<Vec<RatingEvent>> {
        let events = self.control.update(sized(config, &self.theme)?, source)?;
        self.sync_pressed();
        self.state.mark_dirty();
        Ok(events)
    }

    /// Registers the change hook, making the bar interactive.
    pub fn on_changed(&mut self, hook: impl FnMut(f64) + 'static) {
        self.control.set_on_changed(hook);
    }

    /// Registers the session-start hook.
    pub fn on_change_start(&mut self, hook: impl FnMut(f64) + 'static) {
        self.control.set_on_change_start(hook);
    }

    /// Registers the session-end hook.
    pub fn on_change_end(&mut self, hook: impl FnMut(f64) + 'static) {
        self.control.set_on_change_end(hook);
    }

    /// Removes the change hook; the bar becomes read-only.
    pub fn clear_on_changed(&mut self) -> Vec<RatingEvent> {
        let events = self.control.clear_on_changed();
        self.sync_pressed();
        events
    }

    /// The underlying control.
    #[must_use]
    pub fn control(&self) -> &RatingControl {
        &self.control
    }

    /// Resolved theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Shown value: hover preview if any, else the committed value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.control.value()
    }

    /// Cursor to show over the bar.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        let active = self.state.is_hovered() || self.control.is_engaged();
        if active && self.control.is_interactive() {
            self.theme.cursor
        } else {
            Cursor::Default
        }
    }

    fn pointer(&mut self, event: PointerEvent, response: &mut WidgetResponse) {
        let events = self.control.handle_pointer(event, self.state.rect.size());
        response.absorb(&events);
    }

    fn key(&mut self, key: Key) -> Option<f64> {
        let config = self.control.config();
        let action = match key {
            Key::Left => KeyAction::from_arrow(ArrowKey::Left, config),
            Key::Right => KeyAction::from_arrow(ArrowKey::Right, config),
            Key::Up => KeyAction::from_arrow(ArrowKey::Up, config),
            Key::Down => KeyAction::from_arrow(ArrowKey::Down, config),
            Key::Home => Some(KeyAction::Home),
            Key::End => Some(KeyAction::End),
            Key::PageUp => Some(KeyAction::PageIncrement),
            Key::PageDown => Some(KeyAction::PageDecrement),
            Key::Escape => None,
        };
        action.and_then(|action| self.control.handle_key(action))
    }

    fn sync_pressed(&mut self) {
        let engaged = self.control.is_engaged();
        self.state.flags.assign(WidgetFlags::PRESSED, engaged);
    }
}

impl Widget for RatingBar {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        let shown = self.control.value().to_bits();
        let rect = self.state.rect;
        let inside = rect.contains(input.mouse_x, input.mouse_y);
        let point = rect.to_local(input.mouse_x, input.mouse_y);

        let was_hovered = self.state.is_hovered();
        if inside != was_hovered {
            self.state.flags.assign(WidgetFlags::HOVERED, inside);
            response.hovered = inside;
            response.unhovered = !inside;
        }

        if input.pointer_cancelled()
            || (self.control.is_engaged() && input.key_pressed(Key::Escape))
        {
            tracing::debug!("rating bar {} pointer cancelled", self.state.id.raw());
            self.pointer(PointerEvent::Cancel, &mut response);
        }

        let mut pressed_now = false;
        if input.mouse_clicked(MouseButton::Left) {
            if inside {
                response.clicked = true;
                if !self.state.is_focused() {
                    tracing::debug!("rating bar {} focused", self.state.id.raw());
                    self.state.flags.set(WidgetFlags::FOCUSED);
                    response.focused = true;
                }
                self.pointer(PointerEvent::Press(point), &mut response);
                pressed_now = true;
            } else if self.state.is_focused() {
                self.state.flags.clear(WidgetFlags::FOCUSED);
                response.unfocused = true;
            }
        }

        if self.control.is_engaged() {
            if !pressed_now && input.mouse_moved() {
                self.pointer(PointerEvent::Move(point), &mut response);
            }
            if input.mouse_released(MouseButton::Left) {
                self.pointer(PointerEvent::Release, &mut response);
            }
        } else if inside
            && !input.mouse_down(MouseButton::Left)
            && (input.mouse_moved() || response.hovered)
        {
            self.pointer(PointerEvent::Preview(point), &mut response);
        } else if response.unhovered {
            self.pointer(PointerEvent::PreviewExit, &mut response);
        }

        if self.state.is_focused() && !self.control.is_engaged() {
            for &key in input.keys_pressed() {
                if let Some(value) = self.key(key) {
                    response.changed = true;
                    response.value = Some(value);
                }
            }
        }

        self.sync_pressed();
        if response != WidgetResponse::default() || self.control.value().to_bits() != shown {
            self.state.mark_dirty();
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
            self.control.visual_value(),
            self.builder.as_ref(),
            &self.theme,
            self.control.config(),
        );

        if self.state.is_focused() {
            commands.push(RenderCommand::RectOutline {
                bounds: self.state.rect,
                color: self.theme.filled_color,
                width: FOCUS_RING_WIDTH,
            });
        }
    }

    fn min_size(&self) -> (f32, f32) {
        bar_size(self.control.config())
    }
}

/// Validates `config`, then fills sizing left at the config defaults from
/// the resolved theme.
pub(crate) fn sized(mut config: RatingConfig, theme: &Theme) -> RatingResult<RatingConfig> {
    config.validate()?;
    if config.item_size.to_bits() == RatingConfig::DEFAULT_ITEM_SIZE.to_bits() {
        config.item_size = f64::from(theme.item_size);
    }
    if config.spacing.to_bits() == RatingConfig::DEFAULT_SPACING.to_bits() {
        config.spacing = f64::from(theme.spacing);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::render::ItemVisual;
    use ratebar_core::RatingError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bar(initial: f64) -> (RatingBar, Rc<RefCell<Vec<f64>>>) {
        let mut bar = RatingBar::new(
            WidgetId::new(1),
            RatingConfig::new(5).with_hover(true),
            ValueSource::Internal { default: initial },
            RatingStyle::default(),
            &Theme::default(),
            |_: u32| ItemVisual::icon(0),
        )
        .unwrap();
        bar.state_mut().rect = Rect::new(0.0, 0.0, 200.0, 40.0);

        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        bar.on_changed(move |v| sink.borrow_mut().push(v));
        (bar, changes)
    }

    #[test]
    fn test_click_commits_and_focuses() {
        let (mut bar, changes) = bar(0.0);
        let mut input = InputState::new();

        input.set_mouse_pos(70.0, 20.0);
        input.mouse_button_down(MouseButton::Left);
        let response = bar.update(&input);
        assert!(response.clicked);
        assert!(response.focused);
        assert!(response.started);
        assert_eq!(response.value, Some(2.0));
        assert!(bar.state().is_pressed());

        input.begin_frame();
        input.mouse_button_up(MouseButton::Left);
        let response = bar.update(&input);
        assert!(response.ended);
        assert!(!bar.state().is_pressed());
        assert_eq!(*changes.borrow(), vec![2.0]);
    }

    #[test]
    fn test_escape_cancels_session() {
        let (mut bar, _) = bar(0.0);
        let mut input = InputState::new();

        input.set_mouse_pos(30.0, 20.0);
        input.mouse_button_down(MouseButton::Left);
        bar.update(&input);

        input.begin_frame();
        input.key_down(Key::Escape);
        let response = bar.update(&input);
        assert!(response.ended);
        assert!(!bar.control().is_engaged());
    }

    #[test]
    fn test_keyboard_needs_focus() {
        let (mut bar, changes) = bar(2.0);
        let mut input = InputState::new();
        input.set_mouse_pos(500.0, 500.0);

        input.key_down(Key::Right);
        bar.update(&input);
        assert!(changes.borrow().is_empty());

        bar.state_mut().flags.set(WidgetFlags::FOCUSED);
        input.begin_frame();
        input.key_up(Key::Right);
        input.key_down(Key::Right);
        let response = bar.update(&input);
        assert_eq!(response.value, Some(3.0));
        assert_eq!(*changes.borrow(), vec![3.0]);
    }

    #[test]
    fn test_hover_preview_and_cursor() {
        let (mut bar, _) = bar(1.0);
        let mut input = InputState::new();

        input.set_mouse_pos(150.0, 20.0);
        let response = bar.update(&input);
        assert!(response.hovered);
        assert_eq!(bar.control().hover_value(), Some(4.0));
        assert_eq!(bar.value(), 4.0);
        assert_eq!(bar.control().committed_value(), 1.0);
        assert_eq!(bar.cursor(), Cursor::Pointer);

        input.begin_frame();
        input.set_mouse_pos(500.0, 20.0);
        let response = bar.update(&input);
        assert!(response.unhovered);
        assert_eq!(bar.control().hover_value(), None);
        assert_eq!(bar.cursor(), Cursor::Default);
    }

    #[test]
    fn test_style_sizes_items() {
        let bar = RatingBar::new(
            WidgetId::new(2),
            RatingConfig::new(3),
            ValueSource::Internal { default: 0.0 },
            RatingStyle::default().with_item_size(20.0).with_spacing(5.0),
            &Theme::default(),
            |_: u32| ItemVisual::icon(0),
        )
        .unwrap();

        assert_eq!(bar.min_size(), (70.0, 20.0));
        assert_eq!(bar.preferred_size(), (70.0, 20.0));
    }

    #[test]
    fn test_explicit_config_sizing_wins_over_style() {
        let bar = RatingBar::new(
            WidgetId::new(3),
            RatingConfig::new(3).with_item_size(24.0).with_spacing(6.0),
            ValueSource::Internal { default: 0.0 },
            RatingStyle::default().with_item_size(20.0).with_spacing(5.0),
            &Theme::default(),
            |_: u32| ItemVisual::icon(0),
        )
        .unwrap();

        assert_eq!(bar.control().config().item_size, 24.0);
        assert_eq!(bar.control().config().spacing, 6.0);
        assert_eq!(bar.min_size(), (84.0, 24.0));
    }

    #[test]
    fn test_invalid_sizing_fails_fast() {
        let result = RatingBar::new(
            WidgetId::new(4),
            RatingConfig::new(5).with_item_size(-5.0),
            ValueSource::Internal { default: 0.0 },
            RatingStyle::default(),
            &Theme::default(),
            |_: u32| ItemVisual::icon(0),
        );
        assert_eq!(result.err(), Some(RatingError::InvalidItemSize(-5.0)));

        let (mut bar, _) = bar(1.0);
        let rejected = bar.reconfigure(
            RatingConfig::new(5).with_spacing(-3.0),
            ValueSource::Internal { default: 1.0 },
        );
        assert_eq!(rejected.err(), Some(RatingError::NegativeSpacing(-3.0)));
        assert_eq!(bar.control().config().spacing, 0.0);
    }
}
