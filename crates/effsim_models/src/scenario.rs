//! The complete simulation setup as one immutable value.

use effsim_core::types::Interval;

use crate::{Gaussian, ModelError, Modulated, OscillatingEfficiency};

/// Two true PDFs, one efficiency curve, and the sampling box.
///
/// # Examples
/// ```
/// use effsim_models::{Density, Scenario};
///
/// let scenario = Scenario::toy().unwrap();
/// assert_eq!(scenario.domain.low(), -2.0);
/// assert_eq!(scenario.range.high(), 1.0);
///
/// // Observed densities stay under the acceptance ceiling
/// assert!(scenario.observed_f().density(0.0) < scenario.range.high());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Bounds of the independent variable.
    pub domain: Interval,
    /// Bounds of the acceptance height.
    pub range: Interval,
    /// First true PDF.
    pub f: Gaussian,
    /// Second true PDF.
    pub g: Gaussian,
    /// Detection efficiency shared by both PDFs.
    pub efficiency: OscillatingEfficiency,
}

impl Scenario {
    /// The reference toy: domain `(-2, 6)`, range `(0, 1)`,
    /// `f = 7·N(0, 3)`, `g = 9·N(4, 4)` and efficiency
    /// `0.2 + 4.6·N(2.3, 3)·sin²x`.
    pub fn toy() -> Result<Self, ModelError> {
        Ok(Self {
            domain: Interval::new(-2.0, 6.0)?,
            range: Interval::new(0.0, 1.0)?,
            f: Gaussian::new(0.0, 3.0, 7.0)?,
            g: Gaussian::new(4.0, 4.0, 9.0)?,
            efficiency: OscillatingEfficiency::new(0.2, 4.6, 2.3, 3.0)?,
        })
    }

    /// `f` as seen through the efficiency.
    pub fn observed_f(&self) -> Modulated<Gaussian, OscillatingEfficiency> {
        Modulated::new(self.f, self.efficiency)
    }

    /// `g` as seen through the efficiency.
    pub fn observed_g(&self) -> Modulated<Gaussian, OscillatingEfficiency> {
        Modulated::new(self.g, self.efficiency)
    }

    /// Analytic upper bound on every density this scenario samples:
    /// the larger true-PDF peak times the efficiency bound, or the larger
    /// true-PDF peak alone for the mixture.
    pub fn peak_bound(&self) -> f64 {
        let pdf_peak = self.f.peak().max(self.g.peak());
        pdf_peak * self.efficiency.upper_bound().max(1.0)
    }
}
