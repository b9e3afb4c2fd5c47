//! Grid evaluation of densities for plotting and integration.

use effsim_core::math::linspace;
use effsim_core::types::{GridError, Interval};
use effsim_models::Density;

/// A density tabulated on an evenly spaced grid.
///
/// `points` and `values` are parallel: `values[i] == density(points[i])`.
///
/// # Examples
///
/// ```rust
/// use effsim_core::types::Interval;
/// use effsim_mc::grid::Grid;
/// use effsim_models::Gaussian;
///
/// let domain = Interval::new(-2.0, 6.0).unwrap();
/// let f = Gaussian::new(0.0, 3.0, 7.0).unwrap();
/// let grid = Grid::evaluate(&f, &domain, 100).unwrap();
///
/// assert_eq!(grid.len(), 100);
/// assert_eq!(grid.points()[0], -2.0);
/// assert_eq!(grid.points()[99], 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Vec<f64>,
    values: Vec<f64>,
}

impl Grid {
    /// Evaluates `density` on `n` evenly spaced points of `domain`.
    ///
    /// # Errors
    ///
    /// [`GridError::TooFewPoints`] if `n < 2`.
    pub fn evaluate<D: Density + ?Sized>(
        density: &D,
        domain: &Interval,
        n: usize,
    ) -> Result<Self, GridError> {
        let points = linspace(domain, n)?;
        let values = points.iter().map(|&x| density.density(x)).collect();
        Ok(Self { points, values })
    }

    /// Grid points.
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Density values at the grid points.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of grid points (always at least 2).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the grid has no points; a constructed grid never does.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest tabulated value, ignoring NaN.
    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Trapezoidal-rule integral over the grid.
    pub fn integral(&self) -> f64 {
        self.points
            .windows(2)
            .zip(self.values.windows(2))
            .map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use effsim_models::Gaussian;

    #[test]
    fn test_values_match_density() {
        let domain = Interval::new(-2.0, 6.0).unwrap();
        let g = Gaussian::new(4.0, 4.0, 9.0).unwrap();
        let grid = Grid::evaluate(&g, &domain, 50).unwrap();

        for (&x, &y) in grid.points().iter().zip(grid.values()) {
            assert_eq!(y, g.density(x));
        }
    }

    #[test]
    fn test_too_few_points() {
        let domain = Interval::new(0.0, 1.0).unwrap();
        let g = Gaussian::normalised(0.0, 1.0).unwrap();
        assert_eq!(
            Grid::evaluate(&g, &domain, 1),
            Err(GridError::TooFewPoints(1))
        );
    }

    #[test]
    fn test_integral_of_normalised_gaussian() {
        let domain = Interval::new(-40.0, 40.0).unwrap();
        let g = Gaussian::normalised(0.0, 4.0).unwrap();
        let grid = Grid::evaluate(&g, &domain, 10_001).unwrap();
        assert_relative_eq!(grid.integral(), 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_max_value_near_peak() {
        let domain = Interval::new(-2.0, 6.0).unwrap();
        let f = Gaussian::new(0.0, 3.0, 7.0).unwrap();
        let grid = Grid::evaluate(&f, &domain, 801).unwrap();
        // x = 0 is on this grid (spacing 0.01)
        assert_relative_eq!(grid.max_value(), f.peak(), epsilon = 1e-12);
    }
}
