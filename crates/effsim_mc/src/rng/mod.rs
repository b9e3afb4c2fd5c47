//! # Random Number Generation
//!
//! This module provides the single random engine threaded through every
//! sampling call of a run.
//!
//! ## Design
//!
//! - **Explicit handle**: callers pass `&mut SimRng`; there is no process-wide generator
//! - **Reproducibility**: every engine knows its seed, including entropy-seeded ones,
//!   so a run can be replayed by feeding the logged seed back in
//! - **Single-threaded**: one engine per run, borrowed mutably by each pass
//!
//! ## Usage Example
//!
//! ```rust
//! use effsim_core::types::Interval;
//! use effsim_mc::rng::SimRng;
//!
//! let mut rng = SimRng::from_seed(12345);
//! let domain = Interval::new(-2.0, 6.0).unwrap();
//!
//! let x = rng.gen_in(&domain);
//! assert!(x >= -2.0 && x < 6.0);
//! ```

mod prng;

pub use prng::SimRng;
