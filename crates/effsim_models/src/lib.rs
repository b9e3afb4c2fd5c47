//! # effsim_models: Densities and Efficiency Curves (Layer 2)
//!
//! ## Layer 2 Role
//!
//! effsim_models turns the Layer 1 formulas into parameterised model values:
//! - [`Density`]: the single evaluation seam shared by sampler, grid and estimators
//! - [`Gaussian`]: amplitude-scaled Gaussian density (the true PDFs `f`, `g`)
//! - [`OscillatingEfficiency`]: detection efficiency `offset + A·N(x; m, s)·sin²x`
//! - [`Modulated`]: pointwise product of a true PDF and an efficiency
//! - [`Mixture`] / [`MixtureWeights`]: weighted composite of two densities
//! - [`Scenario`]: the complete toy setup as one immutable value
//!
//! Every model carries its parameters by value and is `Copy`, so no closure
//! captures or shared references leak between sampling passes.
//!
//! ## Usage Example
//!
//! ```rust
//! use effsim_models::{Density, Gaussian, Modulated, OscillatingEfficiency};
//!
//! let f = Gaussian::new(0.0, 3.0, 7.0).unwrap();
//! let efficiency = OscillatingEfficiency::new(0.2, 4.6, 2.3, 3.0).unwrap();
//! let observed = Modulated::new(f, efficiency);
//!
//! let x = 1.0;
//! assert_eq!(observed.density(x), f.density(x) * efficiency.density(x));
//! ```

#![deny(missing_docs)]

pub mod density;
pub mod efficiency;
pub mod error;
pub mod gaussian;
pub mod mixture;
pub mod scenario;

pub use density::{Density, Modulated};
pub use efficiency::OscillatingEfficiency;
pub use error::ModelError;
pub use gaussian::Gaussian;
pub use mixture::{Mixture, MixtureWeights};
pub use scenario::Scenario;
