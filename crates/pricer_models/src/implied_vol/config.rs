//! Implied volatility search configuration.

use pricer_core::math::solvers::SolverConfig;
use pricer_core::types::SolverError;

use crate::analytical::AnalyticalError;

/// Default lower end of the volatility search bracket (1% annualised).
pub const DEFAULT_LOWER_VOL: f64 = 0.01;

/// Default upper end of the volatility search bracket (100% annualised).
pub const DEFAULT_UPPER_VOL: f64 = 1.0;

/// Configuration for the implied volatility bisection.
///
/// The bracket is an assumption about where the answer lies: targets whose
/// true implied volatility falls outside `[lower_vol, upper_vol]` come back
/// as `NotFound`. Widen it for high-volatility underlyings.
///
/// # Examples
/// ```
/// use pricer_models::implied_vol::ImpliedVolConfig;
///
/// let config = ImpliedVolConfig::default();
/// assert_eq!(config.lower_vol, 0.01);
/// assert_eq!(config.upper_vol, 1.0);
/// assert_eq!(config.solver.tolerance, 1e-6);
/// assert_eq!(config.solver.max_iterations, 1000);
///
/// let wide = ImpliedVolConfig::default().with_bracket(0.001, 5.0);
/// assert!(wide.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolConfig {
    /// Lower bracket bound σ_low (must be positive).
    pub lower_vol: f64,
    /// Upper bracket bound σ_high (must exceed `lower_vol`).
    pub upper_vol: f64,
    /// Price tolerance and iteration budget.
    pub solver: SolverConfig<f64>,
    /// Price both bracket ends first and return `NotFound` immediately when
    /// the target lies outside them. Off by default: the search then runs
    /// to exhaustion.
    pub check_bracket: bool,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            lower_vol: DEFAULT_LOWER_VOL,
            upper_vol: DEFAULT_UPPER_VOL,
            solver: SolverConfig::default(),
            check_bracket: false,
        }
    }
}

impl ImpliedVolConfig {
    /// Replace the search bracket.
    pub fn with_bracket(mut self, lower_vol: f64, upper_vol: f64) -> Self {
        self.lower_vol = lower_vol;
        self.upper_vol = upper_vol;
        self
    }

    /// Replace the price tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.solver.tolerance = tolerance;
        self
    }

    /// Replace the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.solver.max_iterations = max_iterations;
        self
    }

    /// Enable or disable the up-front bracket check.
    pub fn with_bracket_check(mut self, check_bracket: bool) -> Self {
        self.check_bracket = check_bracket;
        self
    }

    /// Validate bracket and solver settings.
    ///
    /// # Errors
    /// `AnalyticalError::Solver` wrapping `InvalidBracket` when the bracket
    /// is not `0 < lower_vol < upper_vol < ∞`, or `InvalidConfig` when the
    /// tolerance or iteration budget is out of range.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        let ordered = self.lower_vol > 0.0 && self.lower_vol < self.upper_vol;
        if !(ordered && self.upper_vol.is_finite()) {
            return Err(SolverError::InvalidBracket {
                lower: self.lower_vol,
                upper: self.upper_vol,
            }
            .into());
        }
        self.solver.validate()?;
        Ok(())
    }
}
