//! The density evaluation seam.

/// A non-negative function of one real variable.
///
/// Implementors are plain parameter structs; evaluation must be pure.
/// Values need not integrate to one: amplitudes and efficiencies make
/// most densities here unnormalised.
pub trait Density {
    /// Evaluates the density at `x`.
    fn density(&self, x: f64) -> f64;
}

impl<D: Density + ?Sized> Density for &D {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        (**self).density(x)
    }
}

/// A true PDF observed through an efficiency curve: `pdf(x) · efficiency(x)`.
///
/// The un-modulated PDF stays reachable through [`Modulated::pdf`] because
/// the correction estimator weights reconstructed samples by the generating
/// PDF alone.
///
/// # Examples
/// ```
/// use effsim_models::{Density, Gaussian, Modulated};
///
/// let pdf = Gaussian::new(0.0, 1.0, 1.0).unwrap();
/// let half = Gaussian::new(0.0, 1.0, 0.5).unwrap();
/// let observed = Modulated::new(pdf, half);
/// assert_eq!(observed.density(0.3), pdf.density(0.3) * half.density(0.3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modulated<P, E> {
    pdf: P,
    efficiency: E,
}

impl<P: Density, E: Density> Modulated<P, E> {
    /// Combines a PDF with an efficiency curve.
    pub fn new(pdf: P, efficiency: E) -> Self {
        Self { pdf, efficiency }
    }

    /// The un-modulated PDF.
    pub fn pdf(&self) -> &P {
        &self.pdf
    }

    /// The efficiency curve.
    pub fn efficiency(&self) -> &E {
        &self.efficiency
    }
}

impl<P: Density, E: Density> Density for Modulated<P, E> {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        self.pdf.density(x) * self.efficiency.density(x)
    }
}
