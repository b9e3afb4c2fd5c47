//! Mixture builder: correction factors in, composite density out.

use effsim_models::{Density, Mixture, MixtureWeights, ModelError};
use tracing::debug;

/// Normalises `c_first`, `c_second` into weights and combines the two
/// true PDFs into `w_first·first(x) + w_second·second(x)`.
///
/// # Errors
///
/// Any error from [`MixtureWeights::from_corrections`]: a negative or
/// non-finite factor, or both factors zero.
///
/// # Examples
///
/// ```rust
/// use effsim_mc::mixture::build_mixture;
/// use effsim_models::{Density, Gaussian};
///
/// let f = Gaussian::new(0.0, 3.0, 7.0).unwrap();
/// let g = Gaussian::new(4.0, 4.0, 9.0).unwrap();
///
/// let approx = build_mixture(f, g, 1.0, 1.0).unwrap();
/// let x = 2.0;
/// assert!((approx.density(x) - 0.5 * (f.density(x) + g.density(x))).abs() < 1e-15);
/// ```
pub fn build_mixture<A: Density, B: Density>(
    first: A,
    second: B,
    c_first: f64,
    c_second: f64,
) -> Result<Mixture<A, B>, ModelError> {
    let weights = MixtureWeights::from_corrections(c_first, c_second)?;
    debug!(
        c_first,
        c_second,
        w_first = weights.first(),
        w_second = weights.second(),
        "Mixture weights"
    );
    Ok(Mixture::new(weights, first, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use effsim_models::Gaussian;

    #[test]
    fn test_weights_follow_corrections() {
        let f = Gaussian::normalised(0.0, 1.0).unwrap();
        let g = Gaussian::normalised(1.0, 1.0).unwrap();
        let approx = build_mixture(f, g, 30.0, 10.0).unwrap();

        assert_eq!(approx.weights().first(), 0.75);
        assert_eq!(approx.weights().second(), 0.25);
    }

    #[test]
    fn test_degenerate_inputs() {
        let f = Gaussian::normalised(0.0, 1.0).unwrap();
        assert_eq!(
            build_mixture(f, f, 0.0, 0.0),
            Err(ModelError::DegenerateMixture)
        );
    }
}
