//! Evenly spaced grids.

use crate::types::{GridError, Interval};

/// Number of grid points used when dumping curves for plotting.
pub const DEFAULT_GRID_POINTS: usize = 100;

/// Returns `n` evenly spaced points spanning `interval`, both endpoints included.
///
/// The first `n - 1` points are `low + step·i`; the last point is set to
/// `high` directly so that accumulated rounding in `step·(n - 1)` never
/// leaves the final point short of (or past) the upper bound.
///
/// # Errors
///
/// [`GridError::TooFewPoints`] if `n < 2`.
///
/// # Examples
/// ```
/// use effsim_core::math::linspace;
/// use effsim_core::types::Interval;
///
/// let points = linspace(&Interval::new(0.0, 1.0).unwrap(), 5).unwrap();
/// assert_eq!(points, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(interval: &Interval, n: usize) -> Result<Vec<f64>, GridError> {
    if n < 2 {
        return Err(GridError::TooFewPoints(n));
    }

    let step = interval.width() / (n - 1) as f64;
    let mut points = Vec::with_capacity(n);
    points.extend((0..n - 1).map(|i| interval.low() + step * i as f64));
    points.push(interval.high());

    Ok(points)
}
