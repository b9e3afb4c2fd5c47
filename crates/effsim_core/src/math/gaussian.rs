//! Gaussian probability density function.
//!
//! Generic over `T: Float` so the formula can be evaluated in `f32` for
//! cheap plotting grids as well as `f64` for sampling.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Gaussian density with mean `mean` and standard deviation `scale`.
///
/// # Mathematical Definition
/// p(x) = (1 / (s·√(2π))) · exp(-½·((x − m)/s)²)
///
/// # Preconditions
/// `scale > 0`. This is not checked: `scale == 0` divides by zero and
/// yields NaN or infinity. Validated construction lives in
/// `effsim_models::Gaussian`.
///
/// # Examples
/// ```
/// use effsim_core::math::{gaussian_pdf, FRAC_1_SQRT_2PI};
///
/// // Peak value at the mean
/// let peak = gaussian_pdf(4.0_f64, 4.0, 2.0);
/// assert!((peak - FRAC_1_SQRT_2PI / 2.0).abs() < 1e-15);
///
/// // One standard deviation away: exp(-0.5) of the peak
/// let one_sigma = gaussian_pdf(6.0_f64, 4.0, 2.0);
/// assert!((one_sigma - peak * (-0.5_f64).exp()).abs() < 1e-15);
/// ```
#[inline]
pub fn gaussian_pdf<T: Float>(x: T, mean: T, scale: T) -> T {
    let z = (x - mean) / scale;
    let exponent = -constant::<T>(0.5) * z * z;

    constant::<T>(FRAC_1_SQRT_2PI) / scale * exponent.exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peak_at_mean() {
        for scale in [0.1, 0.5, 1.0, 3.0, 4.0, 100.0] {
            let peak = gaussian_pdf(1.5_f64, 1.5, scale);
            assert_relative_eq!(
                peak,
                1.0 / (scale * (2.0 * std::f64::consts::PI).sqrt()),
                epsilon = 1e-14
            );
        }
    }

    #[test]
    fn test_symmetry_about_mean() {
        for offset in [0.5, 1.0, 2.5, 7.0] {
            assert_relative_eq!(
                gaussian_pdf(2.3 + offset, 2.3, 3.0),
                gaussian_pdf(2.3 - offset, 2.3, 3.0),
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_reference_values() {
        // Standard normal
        assert_relative_eq!(gaussian_pdf(1.0_f64, 0.0, 1.0), 0.24197072451914337, epsilon = 1e-12);
        assert_relative_eq!(gaussian_pdf(2.0_f64, 0.0, 1.0), 0.05399096651318806, epsilon = 1e-12);
    }

    #[test]
    fn test_non_negative() {
        let xs: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.1).collect();
        for x in xs {
            assert!(gaussian_pdf(x, 0.0, 3.0) >= 0.0, "negative density at x = {}", x);
        }
    }

    #[test]
    fn test_zero_scale_is_not_finite() {
        let value = gaussian_pdf(1.0_f64, 0.0, 0.0);
        assert!(!value.is_finite() || value == 0.0);
    }

    #[test]
    fn test_f32_compatibility() {
        let result = gaussian_pdf(0.0_f32, 0.0, 1.0);
        assert!((result - 0.398_942_3).abs() < 1e-6);
    }
}
