//! Bisection search for Black-Scholes implied volatility.

use pricer_core::math::solvers::BisectionSolver;
use tracing::{debug, trace};

use super::{ImpliedVolConfig, VolatilityEstimate};
use crate::analytical::black_scholes::price_unchecked;
use crate::analytical::AnalyticalError;
use crate::instruments::OptionContract;

/// Implied volatility solver.
///
/// Inverts the Black-Scholes price in σ by bisection over the configured
/// bracket. Valid because the price is non-decreasing in σ for both calls
/// and puts. Holds only its configuration, so one instance can serve any
/// number of contracts, including from several threads.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::implied_vol::ImpliedVolSolver;
/// use pricer_models::instruments::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(100.0, 100.0, 0.05, 1.0, OptionKind::Call).unwrap();
/// let target = price(&contract, 0.2).unwrap();
///
/// let solver = ImpliedVolSolver::with_defaults();
/// let estimate = solver.solve(&contract, target).unwrap();
/// assert!((estimate.volatility().unwrap() - 0.2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImpliedVolSolver {
    config: ImpliedVolConfig,
}

impl ImpliedVolSolver {
    /// Create a solver with the given configuration.
    pub fn new(config: ImpliedVolConfig) -> Self {
        Self { config }
    }

    /// Create a solver with the default bracket [0.01, 1.00], tolerance
    /// 1e-6 and 1000 iterations.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &ImpliedVolConfig {
        &self.config
    }

    /// Find the volatility that reproduces `target_price`.
    ///
    /// Each iteration prices the contract at the bracket midpoint and stops
    /// once `|price − target| < tolerance`. A price below target raises the
    /// lower bound; anything else lowers the upper bound.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidTargetPrice` if `target_price` is not finite
    /// - `AnalyticalError::Solver` if the bracket or solver settings are invalid
    ///
    /// Exhausting the iteration budget yields `Ok(VolatilityEstimate::NotFound)`.
    pub fn solve(
        &self,
        contract: &OptionContract,
        target_price: f64,
    ) -> Result<VolatilityEstimate, AnalyticalError> {
        let config = &self.config;
        config.validate()?;

        if !target_price.is_finite() {
            return Err(AnalyticalError::InvalidTargetPrice {
                price: target_price,
            });
        }

        if config.check_bracket {
            let tolerance = config.solver.tolerance;
            let lower_price = price_unchecked(contract, config.lower_vol);
            let upper_price = price_unchecked(contract, config.upper_vol);

            if target_price < lower_price - tolerance || target_price > upper_price + tolerance {
                debug!(
                    kind = %contract.kind(),
                    target_price,
                    lower_price,
                    upper_price,
                    "target price outside bracket"
                );
                return Ok(VolatilityEstimate::NotFound { iterations: 0 });
            }
        }

        let solver = BisectionSolver::new(config.solver);
        let result = solver.solve(
            |volatility| {
                let model_price = price_unchecked(contract, volatility);
                trace!(volatility, model_price, "bisection step");
                model_price - target_price
            },
            config.lower_vol,
            config.upper_vol,
        )?;

        let estimate = if result.converged {
            VolatilityEstimate::Converged {
                volatility: result.root,
                iterations: result.iterations,
            }
        } else {
            VolatilityEstimate::NotFound {
                iterations: result.iterations,
            }
        };

        debug!(
            kind = %contract.kind(),
            target_price,
            ?estimate,
            "implied volatility search finished"
        );

        Ok(estimate)
    }
}

/// Find the implied volatility of `contract` at `target_price`.
///
/// Convenience wrapper around [`ImpliedVolSolver::solve`].
///
/// # Examples
/// ```
/// use pricer_models::implied_vol::{implied_volatility, ImpliedVolConfig};
/// use pricer_models::instruments::{OptionContract, OptionKind};
///
/// let call = OptionContract::new(2.651, 2.65, 0.03, 28.0 / 365.0, OptionKind::Call).unwrap();
/// let estimate = implied_volatility(&call, 0.1205, &ImpliedVolConfig::default()).unwrap();
/// assert!((estimate.volatility().unwrap() - 0.39989).abs() < 1e-4);
/// ```
pub fn implied_volatility(
    contract: &OptionContract,
    target_price: f64,
    config: &ImpliedVolConfig,
) -> Result<VolatilityEstimate, AnalyticalError> {
    ImpliedVolSolver::new(*config).solve(contract, target_price)
}
