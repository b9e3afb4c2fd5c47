//! Acceptance-rejection Monte Carlo.
//!
//! # Architecture
//!
//! ```text
//! AcceptRejectSampler
//! ├── Interval (domain)   uniform candidate x
//! ├── Interval (range)    uniform height y
//! ├── SimRng              shared, passed by &mut
//! └── Orchestration
//!     ├── verify_ceiling()   fail loudly before biased sampling
//!     └── sample()           keep x iff y < density(x)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effsim_mc::mc::{AcceptRejectSampler, DEFAULT_CEILING_PROBES};
//! use effsim_mc::rng::SimRng;
//! use effsim_models::Scenario;
//!
//! let scenario = Scenario::toy().unwrap();
//! let sampler = AcceptRejectSampler::new(scenario.domain, scenario.range);
//! let mut rng = SimRng::from_seed(42);
//!
//! let f_samples = sampler
//!     .sample_checked(&mut rng, &scenario.observed_f(), 10_000, DEFAULT_CEILING_PROBES)
//!     .unwrap();
//! assert!(f_samples.len() <= 10_000);
//! ```

mod ceiling;
mod error;
mod sampler;

pub use ceiling::{verify_ceiling, DEFAULT_CEILING_PROBES};
pub use error::SamplingError;
pub use sampler::{AcceptRejectSampler, SampleSet};
