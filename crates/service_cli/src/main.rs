//! ivol - Command Line Black-Scholes Implied Volatility
//!
//! # Commands
//!
//! - `ivol report` - Solve call and put implied volatilities for one underlying
//! - `ivol price --spot .. --strike .. --rate .. --expiry-days .. --vol ..` - Price a contract
//! - `ivol solve --spot .. --strike .. --rate .. --expiry-days .. --target ..` - Solve one contract
//!
//! # Architecture
//!
//! Service layer over `pricer_models`. Configuration is resolved from CLI
//! flags, `IVOL_*` environment variables and an optional TOML file, in that
//! order of precedence.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::report::ReportArgs;
use commands::ContractArgs;
use config::{build_config, CliOverrides, LogLevel, OutputFormat};

/// Black-Scholes implied volatility calculator
#[derive(Parser)]
#[command(name = "ivol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Price tolerance of the implied volatility search
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Iteration budget of the implied volatility search
    #[arg(long, global = true)]
    max_iterations: Option<usize>,

    /// Lower volatility bound of the search bracket
    #[arg(long, global = true)]
    lower_vol: Option<f64>,

    /// Upper volatility bound of the search bracket
    #[arg(long, global = true)]
    upper_vol: Option<f64>,

    /// Report targets outside the bracket prices as not found without iterating
    #[arg(long, global = true)]
    check_bracket: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the call and put implied volatilities of one underlying
    Report(ReportArgs),

    /// Price a contract at a given volatility
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        /// Volatility (annualised, e.g. 0.2 for 20%)
        #[arg(long)]
        vol: f64,
    },

    /// Find the implied volatility of a contract
    Solve {
        #[command(flatten)]
        contract: ContractArgs,

        /// Observed option price
        #[arg(long)]
        target: f64,
    },
}

impl From<&Cli> for CliOverrides {
    fn from(cli: &Cli) -> Self {
        CliOverrides {
            config_file: cli.config.clone(),
            verbose: cli.verbose,
            log_level: cli.log_level,
            format: cli.format,
            tolerance: cli.tolerance,
            max_iterations: cli.max_iterations,
            lower_vol: cli.lower_vol,
            upper_vol: cli.upper_vol,
            check_bracket: cli.check_bracket,
        }
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliOverrides::from(&cli))?;

    init_tracing(config.log_level);

    info!(
        log_level = %config.log_level,
        format = %config.format,
        "ivol v{}",
        env!("CARGO_PKG_VERSION")
    );
    debug!(?config, "Configuration loaded");

    match &cli.command {
        Commands::Report(args) => commands::report::run(args, &config),
        Commands::Price { contract, vol } => commands::price::run(contract, *vol, &config),
        Commands::Solve { contract, target } => commands::solve::run(contract, *target, &config),
    }
}
