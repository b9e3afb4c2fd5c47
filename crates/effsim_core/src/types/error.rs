//! Error types for structured error handling.
//!
//! This module provides:
//! - `IntervalError`: Errors from interval construction
//! - `GridError`: Errors from grid generation

use thiserror::Error;

/// Interval construction errors.
///
/// # Examples
/// ```
/// use effsim_core::types::IntervalError;
///
/// let err = IntervalError::Empty { low: 1.0, high: 1.0 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid interval [1, 1]: low must be strictly less than high"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntervalError {
    /// One of the bounds is NaN or infinite.
    #[error("Invalid interval [{low}, {high}]: bounds must be finite")]
    NonFinite {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },

    /// The lower bound is not strictly below the upper bound.
    #[error("Invalid interval [{low}, {high}]: low must be strictly less than high")]
    Empty {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },
}

/// Grid generation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid spanning both endpoints needs at least two points.
    #[error("Grid needs at least 2 points, got {0}")]
    TooFewPoints(usize),
}
