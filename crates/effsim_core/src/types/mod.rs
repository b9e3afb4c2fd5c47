//! Core value types.
//!
//! - [`Interval`]: an ordered `(low, high)` pair with `low < high`
//! - [`IntervalError`], [`GridError`]: construction failures

pub mod error;
pub mod interval;

pub use error::{GridError, IntervalError};
pub use interval::Interval;
