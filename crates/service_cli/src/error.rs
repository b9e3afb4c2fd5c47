//! Error types for the effsim CLI.

use effsim_core::types::GridError;
use effsim_mc::mc::SamplingError;
use effsim_models::ModelError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Sampling engine error
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    /// Model construction error
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Grid generation error
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: CliError = ConfigError::InvalidLogLevel("loud".to_string()).into();
        assert!(err.to_string().contains("loud"));

        let err: CliError = ModelError::DegenerateMixture.into();
        assert!(err.to_string().starts_with("Model error"));

        let err: CliError = GridError::TooFewPoints(0).into();
        assert!(err.to_string().starts_with("Grid error"));
    }
}
