//! Correction factors for efficiency-modulated sample sets.
//!
//! Each reconstructed sample `x` was accepted with probability proportional
//! to `pdf(x)·efficiency(x)`. Weighting it by `1/pdf(x)` leaves a sum that
//! tracks how much probability mass the efficiency let through, which is
//! what the mixture builder needs to weight the two components.

use effsim_models::Density;

/// `Σ 1/pdf(x)` over `samples`, where `pdf` is the generating density
/// **without** the efficiency applied.
///
/// An empty sample set gives `0.0`. Accepted samples always have
/// `pdf(x) > 0`, so the terms are finite for sets produced by the sampler.
///
/// # Examples
///
/// ```rust
/// use effsim_mc::correction::correction_factor;
/// use effsim_models::Gaussian;
///
/// let f = Gaussian::new(0.0, 1.0, 1.0).unwrap();
/// assert_eq!(correction_factor(&[], &f), 0.0);
///
/// let c = correction_factor(&[0.0, 0.0], &f);
/// assert!((c - 2.0 / f.peak()).abs() < 1e-12);
/// ```
pub fn correction_factor<D: Density + ?Sized>(samples: &[f64], pdf: &D) -> f64 {
    samples.iter().map(|&x| 1.0 / pdf.density(x)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use effsim_models::Gaussian;

    struct Linear;

    impl Density for Linear {
        fn density(&self, x: f64) -> f64 {
            x
        }
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(correction_factor(&[], &Linear), 0.0);
    }

    #[test]
    fn test_inverse_density_sum() {
        let c = correction_factor(&[1.0, 2.0, 4.0], &Linear);
        assert_relative_eq!(c, 1.0 + 0.5 + 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_scales_inversely_with_amplitude() {
        let samples = [-1.0, 0.0, 0.5, 3.0];
        let unit = Gaussian::normalised(0.0, 3.0).unwrap();
        let tall = Gaussian::new(0.0, 3.0, 7.0).unwrap();

        assert_relative_eq!(
            correction_factor(&samples, &tall),
            correction_factor(&samples, &unit) / 7.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_density_gives_infinity() {
        assert_eq!(correction_factor(&[0.0], &Linear), f64::INFINITY);
    }
}
