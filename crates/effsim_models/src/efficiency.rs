//! Detection efficiency curves.

use crate::{Density, Gaussian, ModelError};

/// Efficiency `offset + amplitude · N(x; mean, scale) · sin²x`.
///
/// This is a bounded multiplier, not a normalised density. Keeping the
/// product with each true PDF below the sampling ceiling is left to the
/// caller; [`OscillatingEfficiency::upper_bound`] gives a cheap bound to
/// check against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatingEfficiency {
    offset: f64,
    envelope: Gaussian,
}

impl OscillatingEfficiency {
    /// Creates an efficiency curve.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidParameter`] if `offset` is negative or not
    /// finite, or if the Gaussian envelope parameters are invalid.
    pub fn new(offset: f64, amplitude: f64, mean: f64, scale: f64) -> Result<Self, ModelError> {
        if !(offset.is_finite() && offset >= 0.0) {
            return Err(ModelError::invalid(
                "offset",
                format!("must be non-negative, got {}", offset),
            ));
        }
        Ok(Self {
            offset,
            envelope: Gaussian::new(mean, scale, amplitude)?,
        })
    }

    /// Constant floor of the curve.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The Gaussian envelope modulated by `sin²x`.
    pub fn envelope(&self) -> &Gaussian {
        &self.envelope
    }

    /// `offset + envelope peak`, an upper bound since `sin²x <= 1`.
    pub fn upper_bound(&self) -> f64 {
        self.offset + self.envelope.peak()
    }
}

impl Density for OscillatingEfficiency {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        let s = x.sin();
        self.offset + self.envelope.density(x) * s * s
    }
}
