//! CLI configuration management
//!
//! Settings come from four sources. Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`IVOL_*`)
//! 3. TOML config file
//! 4. Default values

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_core::math::solvers::SolverConfig;
use pricer_models::implied_vol::{ImpliedVolConfig, DEFAULT_LOWER_VOL, DEFAULT_UPPER_VOL};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "IVOL_LOG_LEVEL";
/// Environment variable overriding the price tolerance.
pub const ENV_TOLERANCE: &str = "IVOL_TOLERANCE";
/// Environment variable overriding the iteration budget.
pub const ENV_MAX_ITERATIONS: &str = "IVOL_MAX_ITERATIONS";
/// Environment variable overriding the lower bracket bound.
pub const ENV_LOWER_VOL: &str = "IVOL_LOWER_VOL";
/// Environment variable overriding the upper bracket bound.
pub const ENV_UPPER_VOL: &str = "IVOL_UPPER_VOL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid solver settings: {0}")]
    InvalidSolver(String),

    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnvValue { name: String, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by `--log-level`, `IVOL_LOG_LEVEL` and the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
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
        match s.trim().to_lowercase().as_str() {
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
    /// Tracing filter directive for this level
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

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Output format of command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// `[solver]` table of the config file
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    /// Price tolerance `|price(σ) − target|`
    pub tolerance: f64,
    /// Iteration budget
    pub max_iterations: usize,
    /// Lower bracket bound σ_low
    pub lower_vol: f64,
    /// Upper bracket bound σ_high
    pub upper_vol: f64,
    /// Reject out-of-bracket targets before iterating
    pub check_bracket: bool,
}

impl Default for SolverSection {
    fn default() -> Self {
        let solver = SolverConfig::<f64>::default();
        Self {
            tolerance: solver.tolerance,
            max_iterations: solver.max_iterations,
            lower_vol: DEFAULT_LOWER_VOL,
            upper_vol: DEFAULT_UPPER_VOL,
            check_bracket: false,
        }
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Default output format
    pub format: OutputFormat,
    /// Implied volatility search settings
    pub solver: SolverSection,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `IVOL_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Apply `IVOL_*` overrides using `lookup` to read variables
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse()?;
        }
        if let Some(value) = parse_env(&lookup, ENV_TOLERANCE)? {
            self.solver.tolerance = value;
        }
        if let Some(value) = parse_env(&lookup, ENV_MAX_ITERATIONS)? {
            self.solver.max_iterations = value;
        }
        if let Some(value) = parse_env(&lookup, ENV_LOWER_VOL)? {
            self.solver.lower_vol = value;
        }
        if let Some(value) = parse_env(&lookup, ENV_UPPER_VOL)? {
            self.solver.upper_vol = value;
        }
        Ok(())
    }

    /// Merge with command-line overrides (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(tolerance) = cli.tolerance {
            self.solver.tolerance = tolerance;
        }
        if let Some(max_iterations) = cli.max_iterations {
            self.solver.max_iterations = max_iterations;
        }
        if let Some(lower_vol) = cli.lower_vol {
            self.solver.lower_vol = lower_vol;
        }
        if let Some(upper_vol) = cli.upper_vol {
            self.solver.upper_vol = upper_vol;
        }
        if cli.check_bracket {
            self.solver.check_bracket = true;
        }
    }

    /// Solver configuration for the pricing library
    pub fn implied_vol_config(&self) -> ImpliedVolConfig {
        ImpliedVolConfig {
            lower_vol: self.solver.lower_vol,
            upper_vol: self.solver.upper_vol,
            solver: SolverConfig {
                tolerance: self.solver.tolerance,
                max_iterations: self.solver.max_iterations,
            },
            check_bracket: self.solver.check_bracket,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.implied_vol_config()
            .validate()
            .map_err(|e| ConfigError::InvalidSolver(e.to_string()))
    }
}

fn parse_env<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvValue {
                name: name.to_string(),
                value,
            }),
        None => Ok(None),
    }
}

/// Overrides collected from command-line flags
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// `--verbose`: raise the log level to debug
    pub verbose: bool,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Price tolerance override
    pub tolerance: Option<f64>,
    /// Iteration budget override
    pub max_iterations: Option<usize>,
    /// Lower bracket override
    pub lower_vol: Option<f64>,
    /// Upper bracket override
    pub upper_vol: Option<f64>,
    /// Enable the bracket check
    pub check_bracket: bool,
}

/// Build configuration from all sources
pub fn build_config(cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |name| std::env::var(name).ok())
}

/// Build configuration reading environment variables through `lookup`
pub fn build_config_with<F>(cli: &CliOverrides, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
