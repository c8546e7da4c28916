//! Normalized input events and the notifications the engine emits.

use crate::geometry::Point;

/// A pointer event in the control's local coordinates.
///
/// Whatever the input layer recognizes (taps, drags, hover callbacks) is
/// flattened into this one stream before it reaches the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button or touch went down.
    Press(Point),
    /// Pointer moved while pressed.
    Move(Point),
    /// Primary button or touch went up.
    Release,
    /// The input surface withdrew the gesture.
    Cancel,
    /// Pointer hovers without pressing.
    Preview(Point),
    /// Pointer left the control.
    PreviewExit,
}

/// A notification produced by a committed change or a session edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingEvent {
    /// A session began; carries the value before the session changed it.
    Started(f64),
    /// A new value was committed.
    Changed(f64),
    /// The session ended; carries the final value.
    Ended(f64),
}

impl RatingEvent {
    /// Returns the value carried by the event.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Started(v) | Self::Changed(v) | Self::Ended(v) => v,
        }
    }
}

/// Callbacks invoked when the control emits [`RatingEvent`]s.
///
/// The control is interactive only while `on_changed` is registered.
#[derive(Default)]
pub struct RatingHooks {
    /// Invoked on every committed change.
    pub on_changed: Option<Box<dyn FnMut(f64)>>,
    /// Invoked once when a pointer session starts.
    pub on_change_start: Option<Box<dyn FnMut(f64)>>,
    /// Invoked once when a pointer session ends.
    pub on_change_end: Option<Box<dyn FnMut(f64)>>,
}

impl RatingHooks {
    /// Routes an event to its hook, if registered.
    pub fn dispatch(&mut self, event: RatingEvent) {
        let hook = match event {
            RatingEvent::Started(_) => self.on_change_start.as_mut(),
            RatingEvent::Changed(_) => self.on_changed.as_mut(),
            RatingEvent::Ended(_) => self.on_change_end.as_mut(),
        };
        if let Some(hook) = hook {
            hook(event.value());
        }
    }
}

impl std::fmt::Debug for RatingHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingHooks")
            .field("on_changed", &self.on_changed.is_some())
            .field("on_change_start", &self.on_change_start.is_some())
            .field("on_change_end", &self.on_change_end.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_routes_to_matching_hook() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hooks = RatingHooks::default();

        let changed = Rc::clone(&log);
        hooks.on_changed = Some(Box::new(move |v| changed.borrow_mut().push(("changed", v))));
        let ended = Rc::clone(&log);
        hooks.on_change_end = Some(Box::new(move |v| ended.borrow_mut().push(("ended", v))));

        hooks.dispatch(RatingEvent::Started(1.0));
        hooks.dispatch(RatingEvent::Changed(2.0));
        hooks.dispatch(RatingEvent::Ended(2.0));

        assert_eq!(*log.borrow(), vec![("changed", 2.0), ("ended", 2.0)]);
    }
}
