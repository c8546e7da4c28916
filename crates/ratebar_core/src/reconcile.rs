//! # Value Reconciler
//!
//! Decides which value is authoritative on every update cycle.
//!
//! ## Transitions
//!
//! | Previous     | Incoming                 | Internal state becomes          |
//! |--------------|--------------------------|---------------------------------|
//! | uncontrolled | `External(x)`            | `clamp(x)`                      |
//! | controlled   | `Internal { default }`   | `clamp(last external)`          |
//! | uncontrolled | `Internal { new default }` | `clamp(new default)`          |
//! | uncontrolled | bounds changed           | re-clamped into the new bounds  |
//!
//! The internal state is kept current even while controlled, so a switch back
//! to uncontrolled continues from what the user last saw.

use crate::error::{RatingError, RatingResult};
use crate::snap::Bounds;

/// Where the authoritative value comes from this update cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueSource {
    /// The caller owns the value and supplies it every update.
    External(f64),
    /// The control owns the value; `default` seeds it.
    Internal {
        /// Initial value, and the reset target when it changes.
        default: f64,
    },
}

impl ValueSource {
    /// Returns the value carried by the source.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::External(v) | Self::Internal { default: v } => v,
        }
    }

    /// Checks that the carried value is finite and not negative.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::NonFinite`] or [`RatingError::NegativeValue`].
    pub fn validate(self) -> RatingResult<()> {
        let value = self.value();
        if !value.is_finite() {
            return Err(RatingError::NonFinite { field: "value" });
        }
        if value < 0.0 {
            return Err(RatingError::NegativeValue(value));
        }
        Ok(())
    }
}

/// Whether the caller or the control owns the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Caller-owned.
    Controlled,
    /// Control-owned.
    Uncontrolled,
}

/// Tracks controlled/uncontrolled state across updates.
#[derive(Debug, Clone)]
pub struct ValueReconciler {
    /// Control-owned value; authoritative only when uncontrolled.
    internal: f64,
    /// Current mode.
    mode: SourceMode,
    /// Most recent externally supplied value.
    external: f64,
    /// Most recent default for the uncontrolled mode.
    default: f64,
    /// Bounds from the most recent config.
    bounds: Bounds,
    /// Most recent user-driven value this cycle.
    last_interaction: Option<f64>,
}

impl ValueReconciler {
    /// Creates a reconciler from the first update.
    ///
    /// # Errors
    ///
    /// Returns an error if the source value is negative or not finite.
    pub fn new(source: ValueSource, bounds: Bounds) -> RatingResult<Self> {
        source.validate()?;
        let (mode, external, default) = match source {
            ValueSource::External(v) => (SourceMode::Controlled, v, 0.0),
            ValueSource::Internal { default } => (SourceMode::Uncontrolled, default, default),
        };
        Ok(Self {
            internal: bounds.clamp(source.value()),
            mode,
            external,
            default,
            bounds,
            last_interaction: None,
        })
    }

    /// Applies a new update cycle.
    ///
    /// The pending interaction value survives; the owner drops it with
    /// [`ValueReconciler::end_interaction`] when no session is open.
    ///
    /// # Errors
    ///
    /// Returns an error if the source value is negative or not finite; the
    /// previous state is left untouched.
    pub fn apply(&mut self, source: ValueSource, bounds: Bounds) -> RatingResult<()> {
        source.validate()?;

        let previous = self.mode;
        self.bounds = bounds;

        match source {
            ValueSource::External(value) => {
                if previous == SourceMode::Uncontrolled {
                    tracing::debug!("rating value became controlled at {value}");
                }
                self.mode = SourceMode::Controlled;
                self.external = value;
                self.internal = bounds.clamp(value);
            }
            ValueSource::Internal { default } => {
                if previous == SourceMode::Controlled {
                    tracing::debug!(
                        "rating value became uncontrolled, continuing from {}",
                        self.external
                    );
                    self.mode = SourceMode::Uncontrolled;
                    self.internal = bounds.clamp(self.external);
                } else if default.to_bits() != self.default.to_bits() {
                    self.internal = bounds.clamp(default);
                } else {
                    self.internal = bounds.clamp(self.internal);
                }
                self.default = default;
            }
        }

        Ok(())
    }

    /// The value the control currently stands for, ignoring hover.
    #[must_use]
    pub fn authoritative(&self) -> f64 {
        match self.mode {
            SourceMode::Controlled => self.bounds.clamp(self.external),
            SourceMode::Uncontrolled => self.bounds.clamp(self.internal),
        }
    }

    /// The control-owned value.
    #[must_use]
    pub fn internal(&self) -> f64 {
        self.internal
    }

    /// Current source mode.
    #[must_use]
    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    /// Current bounds.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Commits a user-driven value.
    ///
    /// Returns the clamped value if it differs from the previous one, `None`
    /// if the commit is a repeat.
    pub fn commit(&mut self, value: f64) -> Option<f64> {
        let value = self.bounds.clamp(value);
        let reference = self
            .last_interaction
            .unwrap_or_else(|| self.authoritative());
        if self.bounds.approx_eq(value, reference) {
            return None;
        }

        tracing::trace!("rating commit {reference} -> {value}");
        self.internal = value;
        self.last_interaction = Some(value);
        Some(value)
    }

    /// The value the next commit is compared against.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.last_interaction
            .unwrap_or_else(|| self.authoritative())
    }

    /// Forgets the pending interaction value at the end of a session.
    pub fn end_interaction(&mut self) {
        self.last_interaction = None;
    }
}
