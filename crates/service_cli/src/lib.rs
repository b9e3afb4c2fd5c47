//! Command-line service for the efficiency Monte Carlo toy
//!
//! As the **S**ervice layer, this crate wires the engine to the outside
//! world: configuration from TOML, environment and CLI, CSV output, and the
//! orchestration of one complete run.

pub mod config;
pub mod error;
pub mod output;
pub mod simulation;

pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
