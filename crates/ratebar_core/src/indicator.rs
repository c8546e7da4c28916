//! Read-only rating display.

use crate::config::RatingConfig;
use crate::error::{RatingError, RatingResult};
use crate::geometry::{item_fill, value_to_visual};

/// A rating that is shown but never edited.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingIndicator {
    /// Layout and bounds; gesture settings are ignored.
    config: RatingConfig,
    /// Displayed value, clamped.
    value: f64,
}

impl RatingIndicator {
    /// Creates an indicator.
    ///
    /// # Errors
    ///
    /// Fails on an invalid config or a negative/non-finite value.
    pub fn new(config: RatingConfig, value: f64) -> RatingResult<Self> {
        config.validate()?;
        let value = Self::check(value)?;
        Ok(Self {
            value: config.bounds().clamp(value),
            config,
        })
    }

    /// Replaces the displayed value.
    ///
    /// # Errors
    ///
    /// Fails on a negative or non-finite value.
    pub fn set_value(&mut self, value: f64) -> RatingResult<()> {
        self.value = self.config.bounds().clamp(Self::check(value)?);
        Ok(())
    }

    /// Displayed value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Displayed value in item units.
    #[must_use]
    pub fn visual_value(&self) -> f64 {
        value_to_visual(self.value, self.config.item_count, self.config.max_rating())
    }

    /// Fill fractions of all items in index order.
    pub fn fills(&self) -> impl Iterator<Item = f64> {
        let visual = self.visual_value();
        (0..self.config.item_count).map(move |index| item_fill(visual, index))
    }

    fn check(value: f64) -> RatingResult<f64> {
        if !value.is_finite() {
            return Err(RatingError::NonFinite { field: "value" });
        }
        if value < 0.0 {
            return Err(RatingError::NegativeValue(value));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_fills() {
        let indicator = RatingIndicator::new(RatingConfig::new(5), 3.5).unwrap();
        let fills: Vec<f64> = indicator.fills().collect();
        assert_eq!(fills, vec![1.0, 1.0, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_indicator_clamps_value() {
        let mut indicator = RatingIndicator::new(RatingConfig::new(5), 9.0).unwrap();
        assert!((indicator.value() - 5.0).abs() < 1e-12);

        indicator.set_value(2.0).unwrap();
        assert!((indicator.value() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_indicator_rejects_negative() {
        assert_eq!(
            RatingIndicator::new(RatingConfig::new(5), -1.0),
            Err(RatingError::NegativeValue(-1.0))
        );
    }
}
