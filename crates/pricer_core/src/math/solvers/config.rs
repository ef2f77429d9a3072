//! Solver configuration types.

use crate::types::SolverError;
use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// Provides the convergence tolerance and iteration limit shared by solver
/// implementations.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-6);
/// assert_eq!(config.max_iterations, 1000);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-10,
///     max_iterations: 200,
/// };
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance for root finding.
    ///
    /// The solver stops when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-6
    /// - `max_iterations`: 1000
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 1000,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Check the configuration without panicking.
    ///
    /// Used for values that arrive from files or the command line.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidConfig` if the tolerance is not a
    /// positive finite number or the iteration limit is zero.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.tolerance > T::zero() && self.tolerance.is_finite()) {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 1e-6).abs() < 1e-15);
        assert_eq!(config.max_iterations, 1000);
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-12, 200);
        assert!((config.tolerance - 1e-12).abs() < 1e-17);
        assert_eq!(config.max_iterations, 200);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_zero_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(0.0, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_new_config_zero_iterations_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(1e-10, 0);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(SolverConfig::<f64>::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let negative = SolverConfig {
            tolerance: -1e-6_f64,
            max_iterations: 10,
        };
        assert!(matches!(
            negative.validate(),
            Err(SolverError::InvalidConfig(_))
        ));

        let nan = SolverConfig {
            tolerance: f64::NAN,
            max_iterations: 10,
        };
        assert!(nan.validate().is_err());

        let zero_iter = SolverConfig {
            tolerance: 1e-6_f64,
            max_iterations: 0,
        };
        assert!(zero_iter.validate().is_err());
    }

    #[test]
    fn test_config_copy() {
        let config1: SolverConfig<f64> = SolverConfig::default();
        let config2 = config1;
        assert_eq!(config1, config2);
    }

    #[test]
    fn test_config_with_f32() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!(config.tolerance > 0.0);
        assert_eq!(config.max_iterations, 1000);
    }
}
