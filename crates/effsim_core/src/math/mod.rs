//! Mathematical primitives.
//!
//! - [`gaussian`]: Gaussian probability density
//! - [`linspace`]: Evenly spaced grids over an [`Interval`](crate::types::Interval)

pub mod gaussian;
pub mod linspace;

pub use gaussian::{gaussian_pdf, FRAC_1_SQRT_2PI};
pub use linspace::{linspace, DEFAULT_GRID_POINTS};
