//! Step quantization and bounds.

/// Tolerance applied before taking the ceiling of a step count.
///
/// Without it a tap landing exactly on an item boundary can produce
/// `3.0000000000000004` steps and select the following item.
const CEIL_TOLERANCE: f64 = 1e-9;

/// How a raw value is rounded onto the step grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapMode {
    /// Round up: a tap anywhere inside an item selects that whole item.
    Ceil,
    /// Round to the nearest step (drag and hover).
    Nearest,
}

/// Inclusive value bounds of a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Configured minimum.
    pub min: f64,
    /// Configured maximum.
    pub max: f64,
}

impl Bounds {
    /// Creates bounds from the configured minimum and maximum.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound, guarded against an inverted configuration.
    #[inline]
    #[must_use]
    pub fn effective_min(&self) -> f64 {
        self.min.min(self.max)
    }

    /// Clamps any value into `[effective_min, max]`.
    ///
    /// NaN maps to the lower bound.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let lo = self.effective_min();
        if value.is_nan() {
            return lo;
        }
        value.clamp(lo, self.max)
    }

    /// Comparison tolerance scaled to the value range.
    #[inline]
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        (self.max.abs() * 1e-9).max(1e-9)
    }

    /// Returns true if two values are equal within [`Bounds::epsilon`].
    #[inline]
    #[must_use]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon()
    }
}

/// Quantizes a raw value without clamping.
///
/// A step of zero or less leaves the value continuous.
#[must_use]
pub fn quantize(raw: f64, step: f64, mode: SnapMode) -> f64 {
    if step <= 0.0 {
        return raw;
    }
    let steps = raw / step;
    let snapped = match mode {
        SnapMode::Ceil => (steps - CEIL_TOLERANCE).ceil(),
        SnapMode::Nearest => steps.round(),
    };
    snapped * step
}

/// Quantizes and clamps a raw value.
///
/// Continuous configurations return the raw value unchanged; the commit path
/// clamps it.
#[must_use]
pub fn snap(raw: f64, step: f64, mode: SnapMode, bounds: Bounds) -> f64 {
    if step <= 0.0 {
        return raw;
    }
    bounds.clamp(quantize(raw, step, mode))
}
