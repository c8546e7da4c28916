//! # Interaction State Machine
//!
//! One explicit machine replaces racing tap/drag recognizers:
//!
//! ```text
//!          Press                      Move (drag modes)
//!  Idle ─────────────► Engaged ◄──────────────┐
//!   ▲                     │  └────────────────┘
//!   └──── Release/Cancel ─┘
//! ```
//!
//! Hover arrives as `Preview` events and only ever touches the preview
//! value; it never reaches the commit path.

use crate::config::RatingConfig;
use crate::events::{PointerEvent, RatingEvent};
use crate::geometry::{Point, Size};
use crate::reconcile::ValueReconciler;
use crate::snap::{snap, SnapMode};

/// What started the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Opened by a press that may commit.
    Tap,
    /// Movement has taken over, or the mode only allows dragging.
    Drag,
}

/// State of one continuous pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSession {
    /// Current gesture kind.
    pub kind: GestureKind,
    /// Release should reset to the minimum.
    pub pending_clear: bool,
    /// A move was accepted since the press.
    pub moved: bool,
    /// Authoritative value when the session opened.
    pub started: f64,
}

/// Machine state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    /// No pointer interaction in progress.
    #[default]
    Idle,
    /// A session is open.
    Engaged(InteractionSession),
}

/// Everything the machine reads besides its own state.
#[derive(Debug, Clone, Copy)]
pub struct PointerContext<'a> {
    /// Current configuration.
    pub config: &'a RatingConfig,
    /// Container size for hit testing.
    pub container: Size,
    /// A change hook is registered and gestures are enabled.
    pub interactive: bool,
}

impl PointerContext<'_> {
    fn value_at(&self, position: Point, mode: SnapMode) -> f64 {
        let config = self.config;
        let bounds = config.bounds();
        let raw = config
            .layout()
            .raw_value_at(position, self.container, config.max_rating());
        bounds.clamp(snap(raw, config.step, mode, bounds))
    }
}

/// Pointer gesture state machine.
#[derive(Debug, Clone, Default)]
pub struct InteractionMachine {
    /// Session state.
    phase: Phase,
    /// Hover preview, never committed.
    hover: Option<f64>,
}

impl InteractionMachine {
    /// Creates an idle machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while a session is open.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        matches!(self.phase, Phase::Engaged(_))
    }

    /// Hover preview value, if any.
    #[must_use]
    pub fn hover(&self) -> Option<f64> {
        self.hover
    }

    /// Drops the hover preview.
    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Feeds one normalized pointer event through the machine.
    ///
    /// Returns the notifications produced, in order.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        ctx: &PointerContext<'_>,
        values: &mut ValueReconciler,
    ) -> Vec<RatingEvent> {
        if !ctx.interactive {
            return Vec::new();
        }

        match event {
            PointerEvent::Press(position) => self.press(position, ctx, values),
            PointerEvent::Move(position) => self.drag(position, ctx, values),
            PointerEvent::Release => self.release(values),
            PointerEvent::Cancel => self.cancel(values),
            PointerEvent::Preview(position) => {
                if ctx.config.hover_enabled && !self.is_engaged() {
                    self.hover = Some(ctx.value_at(position, SnapMode::Nearest));
                }
                Vec::new()
            }
            PointerEvent::PreviewExit => {
                self.hover = None;
                Vec::new()
            }
        }
    }

    /// Closes an open session without a release, e.g. after the control
    /// stopped being interactive. Returns the `Ended` notification, if any.
    pub fn abort(&mut self, values: &mut ValueReconciler) -> Option<RatingEvent> {
        self.hover = None;
        match std::mem::take(&mut self.phase) {
            Phase::Idle => None,
            Phase::Engaged(_) => {
                tracing::debug!("rating session aborted");
                Some(Self::close(values))
            }
        }
    }

    fn press(
        &mut self,
        position: Point,
        ctx: &PointerContext<'_>,
        values: &mut ValueReconciler,
    ) -> Vec<RatingEvent> {
        if self.is_engaged() {
            tracing::warn!("press ignored: a rating session is already active");
            return Vec::new();
        }

        let config = ctx.config;
        let mode = config.gesture_mode;
        let bounds = config.bounds();
        let current = values.authoritative();

        self.hover = None;
        let mut events = Vec::with_capacity(2);
        events.push(RatingEvent::Started(current));

        let mut session = InteractionSession {
            kind: if mode.allows_tap() {
                GestureKind::Tap
            } else {
                GestureKind::Drag
            },
            pending_clear: false,
            moved: false,
            started: current,
        };

        if mode.allows_tap() {
            let value = ctx.value_at(position, SnapMode::Ceil);
            let min = bounds.effective_min();
            let above_min = current > min && !bounds.approx_eq(current, min);

            if config.allow_clear && above_min && bounds.approx_eq(value, current) {
                tracing::debug!("tap on current value {current}, clear pending");
                session.pending_clear = true;
            } else if let Some(committed) = values.commit(value) {
                events.push(RatingEvent::Changed(committed));
            }
        }

        tracing::debug!("rating session opened ({:?})", session.kind);
        self.phase = Phase::Engaged(session);
        events
    }

    fn drag(
        &mut self,
        position: Point,
        ctx: &PointerContext<'_>,
        values: &mut ValueReconciler,
    ) -> Vec<RatingEvent> {
        if !ctx.config.gesture_mode.allows_drag() {
            return Vec::new();
        }
        let Phase::Engaged(session) = &mut self.phase else {
            return Vec::new();
        };

        session.kind = GestureKind::Drag;
        session.pending_clear = false;
        session.moved = true;

        let value = ctx.value_at(position, SnapMode::Nearest);
        values
            .commit(value)
            .map(RatingEvent::Changed)
            .into_iter()
            .collect()
    }

    fn release(&mut self, values: &mut ValueReconciler) -> Vec<RatingEvent> {
        let Phase::Engaged(session) = std::mem::take(&mut self.phase) else {
            return Vec::new();
        };

        let mut events = Vec::with_capacity(2);
        if session.pending_clear {
            let min = values.bounds().effective_min();
            tracing::debug!("rating cleared to {min}");
            if let Some(committed) = values.commit(min) {
                events.push(RatingEvent::Changed(committed));
            }
        }
        events.push(Self::close(values));
        events
    }

    fn cancel(&mut self, values: &mut ValueReconciler) -> Vec<RatingEvent> {
        let phase = self.phase;
        match phase {
            Phase::Idle => Vec::new(),
            // Tap cancel: nothing moved, so it closes like a release.
            Phase::Engaged(session) if !session.moved => self.release(values),
            Phase::Engaged(session) => {
                tracing::debug!("rating drag cancelled (started at {})", session.started);
                self.phase = Phase::Idle;
                vec![Self::close(values)]
            }
        }
    }

    fn close(values: &mut ValueReconciler) -> RatingEvent {
        let value = values.current();
        values.end_interaction();
        tracing::debug!("rating session closed at {value}");
        RatingEvent::Ended(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GestureMode;
    use crate::reconcile::ValueSource;

    const CONTAINER: Size = Size::new(200.0, 40.0);

    fn setup(config: &RatingConfig, initial: f64) -> (InteractionMachine, ValueReconciler) {
        let values =
            ValueReconciler::new(ValueSource::Internal { default: initial }, config.bounds()).unwrap();
        (InteractionMachine::new(), values)
    }

    fn ctx(config: &RatingConfig) -> PointerContext<'_> {
        PointerContext {
            config,
            container: CONTAINER,
            interactive: true,
        }
    }

    fn at(x: f64) -> Point {
        Point::new(x, 20.0)
    }

    #[test]
    fn test_tap_commits_and_closes() {
        let config = RatingConfig::new(5);
        let (mut machine, mut values) = setup(&config, 0.0);

        let events = machine.handle(PointerEvent::Press(at(90.0)), &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Started(0.0), RatingEvent::Changed(3.0)]);
        assert!(machine.is_engaged());

        let events = machine.handle(PointerEvent::Release, &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Ended(3.0)]);
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn test_tap_on_current_value_clears_on_release() {
        let config = RatingConfig::new(5);
        let (mut machine, mut values) = setup(&config, 3.0);

        let events = machine.handle(PointerEvent::Press(at(120.0)), &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Started(3.0)]);
        assert!(matches!(
            machine.phase(),
            Phase::Engaged(InteractionSession { pending_clear: true, .. })
        ));

        let events = machine.handle(PointerEvent::Release, &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Changed(0.0), RatingEvent::Ended(0.0)]);
        assert!(values.authoritative().abs() < 1e-12);
    }

    #[test]
    fn test_clear_disabled_keeps_value() {
        let config = RatingConfig::new(5).with_allow_clear(false);
        let (mut machine, mut values) = setup(&config, 3.0);

        machine.handle(PointerEvent::Press(at(120.0)), &ctx(&config), &mut values);
        let events = machine.handle(PointerEvent::Release, &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Ended(3.0)]);
    }

    #[test]
    fn test_no_clear_at_minimum() {
        let config = RatingConfig::new(5).with_min_rating(1.0);
        let (mut machine, mut values) = setup(&config, 1.0);

        let events = machine.handle(PointerEvent::Press(at(10.0)), &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Started(1.0)]);
        assert!(matches!(
            machine.phase(),
            Phase::Engaged(InteractionSession { pending_clear: false, .. })
        ));
    }

    #[test]
    fn test_drag_cancels_pending_clear() {
        let config = RatingConfig::new(5);
        let (mut machine, mut values) = setup(&config, 3.0);

        machine.handle(PointerEvent::Press(at(120.0)), &ctx(&config), &mut values);
        let events = machine.handle(PointerEvent::Move(at(170.0)), &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Changed(4.0)]);

        let events = machine.handle(PointerEvent::Release, &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Ended(4.0)]);
    }

    #[test]
    fn test_drag_rounds_to_nearest() {
        let config = RatingConfig::new(5);
        let (mut machine, mut values) = setup(&config, 0.0);

        machine.handle(PointerEvent::Press(at(10.0)), &ctx(&config), &mut values);
        let events = machine.handle(PointerEvent::Move(at(95.0)), &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Changed(2.0)]);

        // Same snapped value: no repeat notification.
        let events = machine.handle(PointerEvent::Move(at(98.0)), &ctx(&config), &mut values);
        assert!(events.is_empty());
    }

    #[test]
    fn test_tap_mode_ignores_moves() {
        let config = RatingConfig::new(5).with_gesture_mode(GestureMode::Tap);
        let (mut machine, mut values) = setup(&config, 0.0);

        machine.handle(PointerEvent::Press(at(50.0)), &ctx(&config), &mut values);
        assert!(machine
            .handle(PointerEvent::Move(at(190.0)), &ctx(&config), &mut values)
            .is_empty());
        let events = machine.handle(PointerEvent::Release, &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Ended(2.0)]);
    }

    #[test]
    fn test_drag_mode_press_does_not_commit() {
        let config = RatingConfig::new(5).with_gesture_mode(GestureMode::Drag);
        let (mut machine, mut values) = setup(&config, 1.0);

        let events = machine.handle(PointerEvent::Press(at(150.0)), &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Started(1.0)]);
        assert!(matches!(
            machine.phase(),
            Phase::Engaged(InteractionSession { kind: GestureKind::Drag, started, .. }) if started == 1.0
        ));

        let events = machine.handle(PointerEvent::Move(at(150.0)), &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Changed(4.0)]);
    }

    #[test]
    fn test_inert_when_not_interactive() {
        let config = RatingConfig::new(5);
        let (mut machine, mut values) = setup(&config, 0.0);
        let inert = PointerContext {
            interactive: false,
            ..ctx(&config)
        };

        assert!(machine
            .handle(PointerEvent::Press(at(90.0)), &inert, &mut values)
            .is_empty());
        assert!(!machine.is_engaged());
    }

    #[test]
    fn test_tap_cancel_behaves_like_release() {
        let config = RatingConfig::new(5);
        let (mut machine, mut values) = setup(&config, 3.0);

        machine.handle(PointerEvent::Press(at(120.0)), &ctx(&config), &mut values);
        let events = machine.handle(PointerEvent::Cancel, &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Changed(0.0), RatingEvent::Ended(0.0)]);
    }

    #[test]
    fn test_drag_cancel_keeps_last_value() {
        let config = RatingConfig::new(5);
        let (mut machine, mut values) = setup(&config, 0.0);

        machine.handle(PointerEvent::Press(at(10.0)), &ctx(&config), &mut values);
        machine.handle(PointerEvent::Move(at(130.0)), &ctx(&config), &mut values);
        let events = machine.handle(PointerEvent::Cancel, &ctx(&config), &mut values);
        assert_eq!(events, vec![RatingEvent::Ended(3.0)]);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let config = RatingConfig::new(5);
        let (mut machine, mut values) = setup(&config, 0.0);

        machine.handle(PointerEvent::Press(at(90.0)), &ctx(&config), &mut values);
        machine.handle(PointerEvent::Release, &ctx(&config), &mut values);

        assert!(machine
            .handle(PointerEvent::Cancel, &ctx(&config), &mut values)
            .is_empty());
        assert!(machine
            .handle(PointerEvent::Release, &ctx(&config), &mut values)
            .is_empty());
    }

    #[test]
    fn test_second_press_is_ignored() {
        let config = RatingConfig::new(5);
        let (mut machine, mut values) = setup(&config, 0.0);

        machine.handle(PointerEvent::Press(at(90.0)), &ctx(&config), &mut values);
        assert!(machine
            .handle(PointerEvent::Press(at(10.0)), &ctx(&config), &mut values)
            .is_empty());
    }

    #[test]
    fn test_hover_never_commits() {
        let config = RatingConfig::new(5).with_hover(true);
        let (mut machine, mut values) = setup(&config, 1.0);

        let events = machine.handle(PointerEvent::Preview(at(130.0)), &ctx(&config), &mut values);
        assert!(events.is_empty());
        assert_eq!(machine.hover(), Some(3.0));
        assert!((values.authoritative() - 1.0).abs() < 1e-12);

        machine.handle(PointerEvent::PreviewExit, &ctx(&config), &mut values);
        assert_eq!(machine.hover(), None);
    }

    #[test]
    fn test_hover_requires_opt_in() {
        let config = RatingConfig::new(5);
        let (mut machine, mut values) = setup(&config, 1.0);

        machine.handle(PointerEvent::Preview(at(130.0)), &ctx(&config), &mut values);
        assert_eq!(machine.hover(), None);
    }

    #[test]
    fn test_abort_closes_once() {
        let config = RatingConfig::new(5);
        let (mut machine, mut values) = setup(&config, 0.0);

        machine.handle(PointerEvent::Press(at(90.0)), &ctx(&config), &mut values);
        assert_eq!(machine.abort(&mut values), Some(RatingEvent::Ended(3.0)));
        assert_eq!(machine.abort(&mut values), None);
    }
}
