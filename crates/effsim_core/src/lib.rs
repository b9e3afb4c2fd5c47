//! # effsim_core: Foundation for the Efficiency Monte Carlo Toy
//!
//! ## Layer 1 (Foundation) Role
//!
//! effsim_core is the bottom layer of the workspace, providing:
//! - Bounded intervals used as sampling domains and acceptance ranges (`types::interval`)
//! - Error types: `IntervalError`, `GridError` (`types::error`)
//! - The Gaussian density formula (`math::gaussian`)
//! - Evenly spaced grids with exact endpoints (`math::linspace`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other effsim_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use effsim_core::math::{gaussian_pdf, linspace};
//! use effsim_core::types::Interval;
//!
//! let domain = Interval::new(-2.0, 6.0).unwrap();
//! let points = linspace(&domain, 100).unwrap();
//! assert_eq!(points[0], -2.0);
//! assert_eq!(points[99], 6.0);
//!
//! let peak = gaussian_pdf(0.0_f64, 0.0, 1.0);
//! assert!((peak - 0.398_942_280_401_432_7).abs() < 1e-15);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;
