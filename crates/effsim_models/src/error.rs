//! Error types for model construction.

use effsim_core::types::IntervalError;
use thiserror::Error;

/// Model construction errors.
///
/// # Examples
/// ```
/// use effsim_models::ModelError;
///
/// let err = ModelError::InvalidParameter {
///     name: "scale",
///     reason: "must be positive, got 0".to_string(),
/// };
/// assert_eq!(format!("{}", err), "Invalid parameter 'scale': must be positive, got 0");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A shape or amplitude parameter is out of its valid range.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        reason: String,
    },

    /// A correction factor is negative, NaN or infinite.
    #[error("Invalid correction factor {0}: must be finite and non-negative")]
    InvalidCorrection(f64),

    /// Both correction factors are zero, so the weights are undefined.
    #[error("Degenerate mixture: correction factors sum to zero")]
    DegenerateMixture,

    /// A scenario domain or range is malformed.
    #[error(transparent)]
    Interval(#[from] IntervalError),
}

impl ModelError {
    /// Create an invalid parameter error
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
