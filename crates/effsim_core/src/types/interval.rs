//! Bounded real intervals.
//!
//! An [`Interval`] plays two roles in the simulation:
//! - the **domain** bounding the independent variable, and
//! - the **range** bounding the acceptance height in rejection sampling.
//!
//! Both are the same shape, so they share one validated type.

use super::error::IntervalError;

/// An ordered pair `(low, high)` of finite reals with `low < high`.
///
/// The invariant is enforced at construction, so downstream code (uniform
/// draws, grid spacing) never sees an empty or reversed interval.
///
/// # Examples
/// ```
/// use effsim_core::types::Interval;
///
/// let domain = Interval::new(-2.0, 6.0).unwrap();
/// assert_eq!(domain.width(), 8.0);
/// assert!(domain.contains(6.0));
///
/// assert!(Interval::new(1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Creates a new interval after validating `low < high` and finiteness.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::NonFinite`] if either bound is NaN or infinite
    /// - [`IntervalError::Empty`] if `low >= high`
    pub fn new(low: f64, high: f64) -> Result<Self, IntervalError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(IntervalError::NonFinite { low, high });
        }
        if low >= high {
            return Err(IntervalError::Empty { low, high });
        }
        Ok(Self { low, high })
    }

    /// Lower bound.
    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// `high - low`, always strictly positive.
    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if `low <= x <= high`.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.low && x <= self.high
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
