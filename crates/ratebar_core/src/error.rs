//! # Rating Error Types
//!
//! Configuration violations are caller programming errors and fail fast.
//! Out-of-range values produced by input or geometry are never errors;
//! they are clamped by [`crate::snap::Bounds`].

use thiserror::Error;

/// Errors that can occur when configuring a rating control.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    /// The control must render at least one item.
    #[error("invalid item count: {0} (must be greater than zero)")]
    InvalidItemCount(u32),

    /// Step must be zero (continuous) or positive.
    #[error("negative step: {0}")]
    NegativeStep(f64),

    /// Minimum rating below zero.
    #[error("negative minimum rating: {0}")]
    NegativeMinRating(f64),

    /// Maximum rating must be strictly positive.
    #[error("maximum rating must be positive, got {0}")]
    NonPositiveMaxRating(f64),

    /// Minimum rating exceeds the effective maximum.
    #[error("minimum rating {min} exceeds maximum rating {max}")]
    InvertedBounds {
        /// Configured minimum.
        min: f64,
        /// Effective maximum.
        max: f64,
    },

    /// An initial, default or externally supplied value below zero.
    #[error("negative rating value: {0}")]
    NegativeValue(f64),

    /// Item extent along the main axis must be strictly positive.
    #[error("item size must be positive, got {0}")]
    InvalidItemSize(f64),

    /// Spacing between items below zero.
    #[error("negative spacing: {0}")]
    NegativeSpacing(f64),

    /// A floating-point field holds NaN or infinity.
    #[error("non-finite value for `{field}`")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for rating operations.
pub type RatingResult<T> = Result<T, RatingError>;
