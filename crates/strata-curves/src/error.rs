//! Error types for curve and surface operations.

use strata_core::types::Date;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve and surface operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Not enough pillar points to interpolate.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        got: usize,
    },

    /// Invalid discount price.
    #[error("Invalid price {value}: {reason}")]
    InvalidPrice {
        /// The invalid price.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid business-day horizon.
    #[error("Invalid horizon {value}: {reason}")]
    InvalidHorizon {
        /// The invalid horizon in business days.
        value: i64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Horizons are not strictly increasing.
    #[error("Non-monotonic horizons at index {index}: {prev} >= {current}")]
    NonMonotonicHorizons {
        /// Index where monotonicity broke.
        index: usize,
        /// Previous horizon.
        prev: i64,
        /// Current horizon.
        current: i64,
    },

    /// A settlement quote could not be turned into a curve point.
    #[error("Invalid quote: {reason}")]
    InvalidQuote {
        /// Description of the problem.
        reason: String,
    },

    /// Interpolation failed.
    #[error("Interpolation error: {reason}")]
    InterpolationError {
        /// Description of the interpolation error.
        reason: String,
    },

    /// A row was appended out of chronological order.
    #[error("Out-of-order append: row {got} is not after {last}")]
    AppendOutOfOrder {
        /// Last reference date already in the surface.
        last: Date,
        /// Reference date of the rejected row.
        got: Date,
    },

    /// A row's width does not match the surface schema.
    #[error("Schema mismatch: expected {expected} columns, got {got}")]
    SchemaMismatch {
        /// Column count in the schema.
        expected: usize,
        /// Column count in the row.
        got: usize,
    },
}

impl CurveError {
    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid horizon error.
    #[must_use]
    pub fn invalid_horizon(value: i64, reason: impl Into<String>) -> Self {
        Self::InvalidHorizon {
            value,
            reason: reason.into(),
        }
    }

    /// Creates a non-monotonic horizons error.
    #[must_use]
    pub fn non_monotonic_horizons(index: usize, prev: i64, current: i64) -> Self {
        Self::NonMonotonicHorizons {
            index,
            prev,
            current,
        }
    }

    /// Creates an invalid quote error.
    #[must_use]
    pub fn invalid_quote(reason: impl Into<String>) -> Self {
        Self::InvalidQuote {
            reason: reason.into(),
        }
    }

    /// Creates an interpolation error.
    #[must_use]
    pub fn interpolation_error(reason: impl Into<String>) -> Self {
        Self::InterpolationError {
            reason: reason.into(),
        }
    }
}
