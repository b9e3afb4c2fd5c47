//! Error types for the sampling engine.

use effsim_core::types::GridError;
use effsim_models::ModelError;
use thiserror::Error;

/// Sampling engine errors.
///
/// The ceiling variants are raised by the explicit pre-sampling check; the
/// sampler itself never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    /// The density rises above the top of the acceptance range.
    #[error("Density {value} at x = {x} exceeds the sampling ceiling {ceiling}")]
    CeilingExceeded {
        /// Location of the first violation found.
        x: f64,
        /// Density value there.
        value: f64,
        /// Upper bound of the acceptance range.
        ceiling: f64,
    },

    /// The density evaluates to NaN somewhere on the domain.
    #[error("Density is not a number at x = {x}")]
    NonFiniteDensity {
        /// Location of the first NaN found.
        x: f64,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Grid generation failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Model construction failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}
