//! # Rating Control
//!
//! Owns one control's state and wires the engine stages together:
//! geometry and snapping feed the interaction machine, the machine and the
//! keyboard adjuster commit through the reconciler, and every notification
//! is both returned and dispatched to the registered hooks.

use crate::config::RatingConfig;
use crate::error::RatingResult;
use crate::events::{PointerEvent, RatingEvent, RatingHooks};
use crate::geometry::{item_fill, value_to_visual, Size};
use crate::keyboard::{ArrowKey, KeyAction};
use crate::reconcile::{SourceMode, ValueReconciler, ValueSource};
use crate::session::{InteractionMachine, Phase, PointerContext};

/// An interactive rating control.
#[derive(Debug)]
pub struct RatingControl {
    /// Configuration from the latest update.
    config: RatingConfig,
    /// Controlled/uncontrolled value state.
    values: ValueReconciler,
    /// Pointer session state.
    machine: InteractionMachine,
    /// Notification callbacks.
    hooks: RatingHooks,
}

impl RatingControl {
    /// Creates a control from its first configuration.
    ///
    /// # Errors
    ///
    /// Fails fast on any configuration or value contract violation.
    pub fn new(config: RatingConfig, source: ValueSource) -> RatingResult<Self> {
        config.validate()?;
        let values = ValueReconciler::new(source, config.bounds())?;
        Ok(Self {
            config,
            values,
            machine: InteractionMachine::new(),
            hooks: RatingHooks::default(),
        })
    }

    /// Reapplies configuration and value source for a new update cycle.
    ///
    /// An active session is aborted if the control stops being interactive;
    /// the resulting `Ended` notification is returned.
    ///
    /// # Errors
    ///
    /// Fails fast on any contract violation and leaves the control unchanged.
    pub fn update(
        &mut self,
        config: RatingConfig,
        source: ValueSource,
    ) -> RatingResult<Vec<RatingEvent>> {
        if let Err(e) = config.validate().and_then(|()| source.validate()) {
            tracing::warn!("rating update rejected: {e}");
            return Err(e);
        }

        self.values.apply(source, config.bounds())?;
        self.config = config;
        if !self.machine.is_engaged() {
            self.values.end_interaction();
        }
        Ok(self.settle())
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Registers the change hook, making the control interactive.
    pub fn set_on_changed(&mut self, hook: impl FnMut(f64) + 'static) {
        self.hooks.on_changed = Some(Box::new(hook));
    }

    /// Removes the change hook; the control becomes inert.
    ///
    /// Returns the `Ended` notification of an aborted session, if any.
    pub fn clear_on_changed(&mut self) -> Vec<RatingEvent> {
        self.hooks.on_changed = None;
        self.settle()
    }

    /// Registers the session-start hook.
    pub fn set_on_change_start(&mut self, hook: impl FnMut(f64) + 'static) {
        self.hooks.on_change_start = Some(Box::new(hook));
    }

    /// Registers the session-end hook.
    pub fn set_on_change_end(&mut self, hook: impl FnMut(f64) + 'static) {
        self.hooks.on_change_end = Some(Box::new(hook));
    }

    /// Returns true if a change hook is registered and gestures are enabled.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.hooks.on_changed.is_some() && self.config.gesture_mode.is_enabled()
    }

    /// Returns true while a pointer session is open.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.machine.is_engaged()
    }

    /// Current session phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Whether the value is caller-owned.
    #[must_use]
    pub fn source_mode(&self) -> SourceMode {
        self.values.mode()
    }

    /// Handles one normalized pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent, container: Size) -> Vec<RatingEvent> {
        let ctx = PointerContext {
            config: &self.config,
            container,
            interactive: self.is_interactive(),
        };
        let events = self.machine.handle(event, &ctx, &mut self.values);
        self.dispatch(&events);
        events
    }

    /// Applies a keyboard action and commits immediately.
    ///
    /// Returns the committed value, or `None` if nothing changed.
    pub fn handle_key(&mut self, action: KeyAction) -> Option<f64> {
        if !self.is_interactive() {
            return None;
        }

        let target = action.apply(self.values.authoritative(), self.config.step, self.config.bounds());
        let committed = self.values.commit(target)?;
        tracing::debug!("rating key {action:?} committed {committed}");
        self.hooks.dispatch(RatingEvent::Changed(committed));
        Some(committed)
    }

    /// Applies an arrow key after direction remapping.
    pub fn handle_arrow(&mut self, arrow: ArrowKey) -> Option<f64> {
        KeyAction::from_arrow(arrow, &self.config).and_then(|action| self.handle_key(action))
    }

    /// Value to render: the hover preview if present, else the committed value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.machine
            .hover()
            .unwrap_or_else(|| self.committed_value())
    }

    /// Authoritative value, ignoring hover.
    ///
    /// In controlled mode this is the caller's value; a user commit shows up
    /// here once the caller supplies it back through [`RatingControl::update`].
    #[must_use]
    pub fn committed_value(&self) -> f64 {
        self.values.authoritative()
    }

    /// Hover preview, if any. Never a committed value.
    #[must_use]
    pub fn hover_value(&self) -> Option<f64> {
        self.machine.hover()
    }

    /// Rendered value in item units.
    #[must_use]
    pub fn visual_value(&self) -> f64 {
        value_to_visual(self.value(), self.config.item_count, self.config.max_rating())
    }

    /// Fill fraction of one item.
    #[must_use]
    pub fn item_fill(&self, index: u32) -> f64 {
        item_fill(self.visual_value(), index)
    }

    /// Fill fractions of all items in index order.
    pub fn fills(&self) -> impl Iterator<Item = f64> + '_ {
        let visual = self.visual_value();
        (0..self.config.item_count).map(move |index| item_fill(visual, index))
    }

    fn settle(&mut self) -> Vec<RatingEvent> {
        if self.is_interactive() {
            if !self.config.hover_enabled {
                self.machine.clear_hover();
            }
            return Vec::new();
        }

        let events: Vec<_> = self.machine.abort(&mut self.values).into_iter().collect();
        self.dispatch(&events);
        events
    }

    fn dispatch(&mut self, events: &[RatingEvent]) {
        for &event in events {
            self.hooks.dispatch(event);
        }
    }
}
