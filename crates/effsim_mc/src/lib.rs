//! # effsim_mc: Monte Carlo Engine (Layer 3)
//!
//! ## Layer 3 Role
//!
//! effsim_mc runs the acceptance-rejection experiment on Layer 2 models:
//! - [`rng`]: the seeded random engine threaded through every pass
//! - [`mc`]: the acceptance-rejection sampler and its pre-sampling ceiling check
//! - [`correction`]: inverse-density correction factors `Σ 1/pdf(x)`
//! - [`mixture`]: correction factors to a weighted mixture of the true PDFs
//! - [`grid`]: densities tabulated on evenly spaced points
//! - [`histogram`]: binned counts and the measured efficiency ratio
//!
//! Nothing here touches the filesystem; output is the service layer's job.
//!
//! ## Usage Example
//!
//! ```rust
//! use effsim_mc::correction::correction_factor;
//! use effsim_mc::mc::AcceptRejectSampler;
//! use effsim_mc::mixture::build_mixture;
//! use effsim_mc::rng::SimRng;
//! use effsim_models::Scenario;
//!
//! let scenario = Scenario::toy().unwrap();
//! let sampler = AcceptRejectSampler::new(scenario.domain, scenario.range);
//! let mut rng = SimRng::from_seed(7);
//!
//! let f_reco = sampler.sample(&mut rng, &scenario.observed_f(), 5_000);
//! let g_reco = sampler.sample(&mut rng, &scenario.observed_g(), 5_000);
//!
//! let c_f = correction_factor(f_reco.values(), &scenario.f);
//! let c_g = correction_factor(g_reco.values(), &scenario.g);
//!
//! let approx = build_mixture(scenario.f, scenario.g, c_f, c_g).unwrap();
//! let total = approx.weights().first() + approx.weights().second();
//! assert!((total - 1.0).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod correction;
pub mod grid;
pub mod histogram;
pub mod mc;
pub mod mixture;
pub mod rng;
