//! Two-component mixtures weighted by correction factors.

use crate::{Density, ModelError};

/// Normalised mixture weights `(w_first, w_second)` with `w_first + w_second = 1`.
///
/// # Examples
/// ```
/// use effsim_models::MixtureWeights;
///
/// let weights = MixtureWeights::from_corrections(3.0, 1.0).unwrap();
/// assert_eq!(weights.first(), 0.75);
/// assert_eq!(weights.second(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureWeights {
    first: f64,
    second: f64,
}

impl MixtureWeights {
    /// Normalises two correction factors by their sum.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidCorrection`] if either factor is negative or not finite
    /// - [`ModelError::DegenerateMixture`] if both factors are zero
    pub fn from_corrections(c_first: f64, c_second: f64) -> Result<Self, ModelError> {
        for c in [c_first, c_second] {
            if !(c.is_finite() && c >= 0.0) {
                return Err(ModelError::InvalidCorrection(c));
            }
        }

        let scale = c_first + c_second;
        if scale == 0.0 {
            return Err(ModelError::DegenerateMixture);
        }
        if !scale.is_finite() {
            return Err(ModelError::InvalidCorrection(scale));
        }

        Ok(Self {
            first: c_first / scale,
            second: c_second / scale,
        })
    }

    /// Weight of the first component.
    #[inline]
    pub fn first(&self) -> f64 {
        self.first
    }

    /// Weight of the second component.
    #[inline]
    pub fn second(&self) -> f64 {
        self.second
    }
}

/// `w_first · first(x) + w_second · second(x)`.
///
/// The composite peak is bounded by the larger component peak, since the
/// weights are a convex combination. Whether that stays below a sampling
/// ceiling depends on the component amplitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mixture<A, B> {
    weights: MixtureWeights,
    first: A,
    second: B,
}

impl<A: Density, B: Density> Mixture<A, B> {
    /// Builds the composite density.
    pub fn new(weights: MixtureWeights, first: A, second: B) -> Self {
        Self {
            weights,
            first,
            second,
        }
    }

    /// Component weights.
    pub fn weights(&self) -> MixtureWeights {
        self.weights
    }
}

impl<A: Density, B: Density> Density for Mixture<A, B> {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        self.weights.first * self.first.density(x) + self.weights.second * self.second.density(x)
    }
}
