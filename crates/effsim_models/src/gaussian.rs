//! Amplitude-scaled Gaussian densities.

use effsim_core::math::{gaussian_pdf, FRAC_1_SQRT_2PI};

use crate::{Density, ModelError};

/// `amplitude · N(x; mean, scale)`.
///
/// Construction validates `scale > 0`, so evaluation can use the unchecked
/// formula from [`effsim_core::math::gaussian_pdf`].
///
/// # Examples
/// ```
/// use effsim_models::{Density, Gaussian};
///
/// let f = Gaussian::new(0.0, 3.0, 7.0).unwrap();
/// assert!((f.density(0.0) - f.peak()).abs() < 1e-15);
///
/// assert!(Gaussian::new(0.0, 0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    mean: f64,
    scale: f64,
    amplitude: f64,
}

impl Gaussian {
    /// Creates a scaled Gaussian.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidParameter`] if `mean` is not finite, `scale` is
    /// not finite and positive, or `amplitude` is not finite and non-negative.
    pub fn new(mean: f64, scale: f64, amplitude: f64) -> Result<Self, ModelError> {
        if !mean.is_finite() {
            return Err(ModelError::invalid("mean", format!("must be finite, got {}", mean)));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ModelError::invalid("scale", format!("must be positive, got {}", scale)));
        }
        if !(amplitude.is_finite() && amplitude >= 0.0) {
            return Err(ModelError::invalid(
                "amplitude",
                format!("must be non-negative, got {}", amplitude),
            ));
        }
        Ok(Self {
            mean,
            scale,
            amplitude,
        })
    }

    /// A unit-amplitude (normalised) Gaussian.
    pub fn normalised(mean: f64, scale: f64) -> Result<Self, ModelError> {
        Self::new(mean, scale, 1.0)
    }

    /// Mean (location of the peak).
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Overall multiplier.
    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Maximum value, attained at the mean: `amplitude / (scale·√(2π))`.
    #[inline]
    pub fn peak(&self) -> f64 {
        self.amplitude * FRAC_1_SQRT_2PI / self.scale
    }
}

impl Density for Gaussian {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        self.amplitude * gaussian_pdf(x, self.mean, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peak_matches_density_at_mean() {
        let g = Gaussian::new(4.0, 4.0, 9.0).unwrap();
        assert_relative_eq!(g.density(4.0), g.peak(), epsilon = 1e-15);
        assert_relative_eq!(g.peak(), 9.0 / (4.0 * (2.0 * std::f64::consts::PI).sqrt()), epsilon = 1e-14);
    }

    #[test]
    fn test_amplitude_scales_linearly() {
        let unit = Gaussian::normalised(0.0, 3.0).unwrap();
        let scaled = Gaussian::new(0.0, 3.0, 7.0).unwrap();
        for x in [-2.0, 0.0, 1.5, 6.0] {
            assert_relative_eq!(scaled.density(x), 7.0 * unit.density(x), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_invalid_scale() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Gaussian::new(0.0, scale, 1.0);
            assert!(
                matches!(result, Err(ModelError::InvalidParameter { name: "scale", .. })),
                "scale {} accepted",
                scale
            );
        }
    }

    #[test]
    fn test_invalid_amplitude() {
        assert!(matches!(
            Gaussian::new(0.0, 1.0, -0.1),
            Err(ModelError::InvalidParameter { name: "amplitude", .. })
        ));
    }

    #[test]
    fn test_invalid_mean() {
        assert!(matches!(
            Gaussian::new(f64::NAN, 1.0, 1.0),
            Err(ModelError::InvalidParameter { name: "mean", .. })
        ));
    }

    #[test]
    fn test_zero_amplitude_allowed() {
        let g = Gaussian::new(0.0, 1.0, 0.0).unwrap();
        assert_eq!(g.density(0.0), 0.0);
    }
}
