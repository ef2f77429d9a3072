//! CLI error types

use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `ivol` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] AnalyticalError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pricing_error() {
        let err: CliError = AnalyticalError::InvalidSpot { spot: -1.0 }.into();
        assert!(matches!(err, CliError::Pricing(_)));
        assert!(err.to_string().starts_with("Pricing error"));
    }

    #[test]
    fn test_from_config_error() {
        let err: CliError = ConfigError::InvalidFormat("xml".to_string()).into();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_from_serialisation_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CliError = json_err.into();
        assert!(err.to_string().starts_with("Serialisation error"));
    }

    #[test]
    fn test_variant_set() {
        fn source(err: &CliError) -> &'static str {
            match err {
                CliError::Config(_) => "config",
                CliError::Pricing(_) => "pricing",
                CliError::InvalidArgument(_) => "argument",
                CliError::Serialisation(_) => "json",
            }
        }
        let err = CliError::InvalidArgument("--expiry-days".to_string());
        assert_eq!(source(&err), "argument");
    }
}
