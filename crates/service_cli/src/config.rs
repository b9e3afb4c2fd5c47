//! Run configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! CLI arguments.

use effsim_core::math::DEFAULT_GRID_POINTS;
use effsim_mc::histogram::DEFAULT_HISTOGRAM_BINS;
use effsim_mc::mc::DEFAULT_CEILING_PROBES;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Trial count used for each base distribution when none is given.
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "EFFSIM_SEED";
/// Environment variable overriding the output directory.
pub const ENV_OUTPUT_DIR: &str = "EFFSIM_OUTPUT_DIR";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "EFFSIM_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid grid size: {0}. Must be at least 2")]
    InvalidGridPoints(usize),

    #[error("Invalid histogram bin count: {0}. Must be at least 1")]
    InvalidHistogramBins(usize),

    #[error("Invalid ceiling probe count: {0}. Must be at least 2")]
    InvalidCeilingProbes(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Simulation run configuration
///
/// Sample counts come from the command line only; every other field can be
/// set in the TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Trials for the efficiency-modulated `f`
    #[serde(skip)]
    pub n_f: usize,
    /// Trials for the efficiency-modulated `g`
    #[serde(skip)]
    pub n_g: usize,
    /// Fixed seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Directory the CSV files are written to
    pub output_dir: PathBuf,
    /// Points per dumped curve
    pub grid_points: usize,
    /// Histogram bins for the measured efficiency
    pub histogram_bins: usize,
    /// Probe points for each ceiling check
    pub ceiling_probes: usize,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_f: DEFAULT_SAMPLE_COUNT,
            n_g: DEFAULT_SAMPLE_COUNT,
            seed: None,
            output_dir: PathBuf::from("."),
            grid_points: DEFAULT_GRID_POINTS,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            ceiling_probes: DEFAULT_CEILING_PROBES,
            log_level: LogLevel::Info,
        }
    }
}

impl SimulationConfig {
    /// Create a new SimulationConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: SimulationConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Override fields from `lookup`, which maps a variable name to its value
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(seed.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} is not an unsigned integer: {}", ENV_SEED, seed))
            })?);
        }

        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            self.output_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_points < 2 {
            return Err(ConfigError::InvalidGridPoints(self.grid_points));
        }
        if self.histogram_bins == 0 {
            return Err(ConfigError::InvalidHistogramBins(self.histogram_bins));
        }
        if self.ceiling_probes < 2 {
            return Err(ConfigError::InvalidCeilingProbes(self.ceiling_probes));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let (Some(n_f), Some(n_g)) = (cli.n_f, cli.n_g) {
            self.n_f = n_f;
            self.n_g = n_g;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(dir) = &cli.output_dir {
            self.output_dir = dir.clone();
        }
        if cli.verbose && self.log_level > LogLevel::Debug {
            self.log_level = LogLevel::Debug;
        }
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Trial count override for `f`
    pub n_f: Option<usize>,
    /// Trial count override for `g`
    pub n_g: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
    /// Raise the log level to at least debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<SimulationConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        SimulationConfig::from_file(config_path)?
    } else {
        SimulationConfig::default()
    };

    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
