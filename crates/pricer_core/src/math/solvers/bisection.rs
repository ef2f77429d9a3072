//! Bisection root-finding solver for monotone functions.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Outcome of a bisection run.
///
/// `converged` is `false` when the iteration budget ran out before
/// `|f(root)| < tolerance`; in that case `root` is the last midpoint and
/// must not be treated as a solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionResult<T: Float> {
    /// Last evaluated midpoint.
    pub root: T,
    /// Function value at `root`.
    pub residual: T,
    /// Number of function evaluations performed.
    pub iterations: usize,
    /// Whether the tolerance was met.
    pub converged: bool,
}

/// Bisection root finder for non-decreasing functions.
///
/// Each iteration evaluates `f` at the bracket midpoint. A negative value
/// moves the lower bound up, anything else moves the upper bound down. The
/// search stops as soon as `|f(mid)| < tolerance`.
///
/// No sign check is performed on the endpoints: if the root lies outside
/// the bracket the solver simply runs until `max_iterations` and reports
/// `converged = false`.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-10, 200));
///
/// // Solve x² - 2 = 0 in bracket [0, 2]
/// let result = solver.solve(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
/// assert!(result.converged);
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Run the bisection loop on `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// * `SolverError::InvalidBracket` - endpoints not finite or `lower >= upper`
    /// * `SolverError::InvalidConfig` - configuration fails validation
    ///
    /// Non-convergence is not an error; inspect `BisectionResult::converged`.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::BisectionSolver;
    ///
    /// let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();
    ///
    /// // Root at 5.0 lies outside [0, 1]
    /// let result = solver.solve(|x| x - 5.0, 0.0, 1.0).unwrap();
    /// assert!(!result.converged);
    /// assert_eq!(result.iterations, 1000);
    /// ```
    pub fn solve<F>(&self, mut f: F, lower: T, upper: T) -> Result<BisectionResult<T>, SolverError>
    where
        F: FnMut(T) -> T,
    {
        self.config.validate()?;

        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(SolverError::InvalidBracket {
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }

        let two = T::from(2.0).unwrap();
        let mut lo = lower;
        let mut hi = upper;
        let mut mid = (lo + hi) / two;
        let mut residual = T::nan();

        for iteration in 1..=self.config.max_iterations {
            mid = (lo + hi) / two;
            residual = f(mid);

            if residual.abs() < self.config.tolerance {
                return Ok(BisectionResult {
                    root: mid,
                    residual,
                    iterations: iteration,
                    converged: true,
                });
            }

            if residual < T::zero() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Ok(BisectionResult {
            root: mid,
            residual,
            iterations: self.config.max_iterations,
            converged: false,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
