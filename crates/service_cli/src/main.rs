//! effsim - efficiency Monte Carlo toy
//!
//! Samples two efficiency-modulated Gaussian PDFs by acceptance-rejection,
//! estimates their correction factors, samples the reweighted mixture and
//! writes every curve and sample set as CSV for offline plotting.
//!
//! # Usage
//!
//! - `effsim` - 10000 trials for each PDF
//! - `effsim <N_F> <N_G>` - explicit trial counts
//! - `effsim --seed 42 --output-dir plots` - reproducible run into `plots/`

use anyhow::Context;
use clap::Parser;
use service_cli::config::{build_config, CliArgs};
use service_cli::simulation;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Efficiency Monte Carlo toy
#[derive(Parser, Debug)]
#[command(name = "effsim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Trials for the efficiency-modulated f (give both counts or neither)
    #[arg(value_name = "N_F", requires = "n_g")]
    n_f: Option<usize>,

    /// Trials for the efficiency-modulated g
    #[arg(value_name = "N_G")]
    n_g: Option<usize>,

    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the random engine (default: OS entropy)
    #[arg(long, env = "EFFSIM_SEED")]
    seed: Option<u64>,

    /// Directory for the CSV output
    #[arg(short, long, value_name = "DIR", env = "EFFSIM_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for CliArgs {
    fn from(args: Args) -> Self {
        CliArgs {
            config_file: args.config,
            n_f: args.n_f,
            n_g: args.n_g,
            seed: args.seed,
            output_dir: args.output_dir,
            verbose: args.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: CliArgs = args.into();
    let config = build_config(&cli_args).context("Failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());

    info!("effsim v{}", service_cli::VERSION);
    info!(
        n_f = config.n_f,
        n_g = config.n_g,
        seed = ?config.seed,
        output_dir = %config.output_dir.display(),
        grid_points = config.grid_points,
        histogram_bins = config.histogram_bins,
        ceiling_probes = config.ceiling_probes,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let summary = simulation::run(&config).context("Simulation failed")?;

    info!(
        seed = summary.seed,
        f_accepted = summary.f_accepted,
        g_accepted = summary.g_accepted,
        approx_accepted = summary.approx_accepted,
        w_f = summary.w_f,
        w_g = summary.w_g,
        failed_writes = summary.failed_writes,
        "Run summary"
    );

    Ok(())
}
