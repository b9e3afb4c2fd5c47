//! Pre-sampling check that a density fits under the acceptance range.

use effsim_core::math::linspace;
use effsim_core::types::Interval;
use effsim_models::Density;
use tracing::debug;

use super::error::SamplingError;

/// Probe count used by the simulation before each sampling pass.
pub const DEFAULT_CEILING_PROBES: usize = 10_000;

/// Evaluates `density` on `probes` evenly spaced domain points and fails at
/// the first value above `range.high()` or the first NaN.
///
/// Returns the largest value seen. This is a grid probe, not a proof: a
/// spike narrower than the probe spacing can slip through.
///
/// # Errors
///
/// - [`SamplingError::InvalidParameter`] if `probes < 2`
/// - [`SamplingError::NonFiniteDensity`] on a NaN value
/// - [`SamplingError::CeilingExceeded`] on a value above the ceiling
///
/// # Examples
///
/// ```rust
/// use effsim_core::types::Interval;
/// use effsim_mc::mc::verify_ceiling;
/// use effsim_models::Gaussian;
///
/// let domain = Interval::new(-2.0, 6.0).unwrap();
/// let range = Interval::new(0.0, 1.0).unwrap();
///
/// let f = Gaussian::new(0.0, 3.0, 7.0).unwrap();
/// assert!(verify_ceiling(&f, &domain, &range, 1000).is_ok());
///
/// let too_tall = Gaussian::new(0.0, 3.0, 8.0).unwrap();
/// assert!(verify_ceiling(&too_tall, &domain, &range, 1000).is_err());
/// ```
pub fn verify_ceiling<D: Density + ?Sized>(
    density: &D,
    domain: &Interval,
    range: &Interval,
    probes: usize,
) -> Result<f64, SamplingError> {
    if probes < 2 {
        return Err(SamplingError::InvalidParameter {
            name: "probes",
            value: format!("need at least 2 probe points, got {}", probes),
        });
    }

    let ceiling = range.high();
    let mut max_value = f64::NEG_INFINITY;

    for x in linspace(domain, probes)? {
        let value = density.density(x);
        if value.is_nan() {
            return Err(SamplingError::NonFiniteDensity { x });
        }
        if value > ceiling {
            return Err(SamplingError::CeilingExceeded { x, value, ceiling });
        }
        max_value = max_value.max(value);
    }

    debug!(max_value, ceiling, probes, "Ceiling check passed");
    Ok(max_value)
}
