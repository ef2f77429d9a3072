//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options on a non-dividend-paying underlying.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::{is_positive, OptionContract, OptionKind};

/// Prices a European option at volatility `volatility`.
///
/// Pure function of its inputs. The contract already guarantees positive
/// spot, strike and expiry; the volatility is checked here.
///
/// # Errors
/// `AnalyticalError::InvalidVolatility` if `volatility <= 0` or not finite.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::{OptionContract, OptionKind};
///
/// let call = OptionContract::new(100.0, 100.0, 0.05, 1.0, OptionKind::Call).unwrap();
/// let value = price(&call, 0.2).unwrap();
/// assert!((value - 10.450583572185565).abs() < 1e-10);
///
/// assert!(price(&call, 0.0).is_err());
/// ```
pub fn price(contract: &OptionContract, volatility: f64) -> Result<f64, AnalyticalError> {
    let model = BlackScholes::new(contract.spot(), contract.rate(), volatility)?;
    Ok(model.price_option(contract))
}

/// Price without the volatility check.
///
/// Callers must guarantee `volatility > 0`; the implied volatility search
/// uses it inside a validated positive bracket.
#[inline]
pub(crate) fn price_unchecked(contract: &OptionContract, volatility: f64) -> f64 {
    BlackScholes {
        spot: contract.spot(),
        rate: contract.rate(),
        volatility,
    }
    .price_option(contract)
}

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate) and the volatility; contract terms
/// (strike, expiry, kind) are passed per call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, finite)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !is_positive(spot) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate });
        }

        if !is_positive(volatility) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
    ///
    /// `strike` and `expiry` must be positive.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// assert!(bs.price_call(100.0, 1.0) > 0.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices a call or put.
    #[inline]
    pub fn price(&self, kind: OptionKind, strike: f64, expiry: f64) -> f64 {
        match kind {
            OptionKind::Call => self.price_call(strike, expiry),
            OptionKind::Put => self.price_put(strike, expiry),
        }
    }

    /// Prices a contract using the contract's strike, expiry and kind.
    ///
    /// The model's own spot and rate are used, not the contract's.
    #[inline]
    pub fn price_option(&self, contract: &OptionContract) -> f64 {
        self.price(contract.kind(), contract.strike(), contract.expiry())
    }

    /// Computes Vega (∂V/∂σ) = S·√T·φ(d₁).
    ///
    /// Identical for calls and puts and never negative, which is what makes
    /// price monotone in σ.
    #[inline]
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        self.spot * expiry.sqrt() * norm_pdf(d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_call() -> OptionContract {
        OptionContract::new(100.0, 100.0, 0.05, 1.0, OptionKind::Call).unwrap()
    }

    // ==========================================================
    // Construction
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        assert_eq!(
            BlackScholes::new(0.0, 0.05, 0.2),
            Err(AnalyticalError::InvalidSpot { spot: 0.0 })
        );
    }

    #[test]
    fn test_new_invalid_volatility() {
        for vol in [0.0, -0.2, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                BlackScholes::new(100.0, 0.05, vol),
                Err(AnalyticalError::InvalidVolatility { .. })
            ));
        }
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0, -0.01, 0.2).is_ok());
    }

    // ==========================================================
    // d1 / d2
    // ==========================================================

    #[test]
    fn test_d1_atm() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        // (0 + (0.05 + 0.02) * 1) / 0.2 = 0.35
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = BlackScholes::new(100.0, 0.05, 0.3).unwrap();
        let expiry = 0.75;
        assert_relative_eq!(
            bs.d1(90.0, expiry) - bs.d2(90.0, expiry),
            0.3 * expiry.sqrt(),
            epsilon = 1e-12
        );
    }

    // ==========================================================
    // Prices
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.450583572185565, epsilon = 1e-10);
    }

    #[test]
    fn test_put_price_reference_value() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_put(100.0, 1.0), 5.573526022256971, epsilon = 1e-10);
    }

    #[test]
    fn test_otm_reference_values() {
        let bs = BlackScholes::new(100.0, 0.02, 0.3).unwrap();
        assert_relative_eq!(bs.price_call(110.0, 0.5), 5.071235559904636, epsilon = 1e-10);
        assert_relative_eq!(bs.price_put(110.0, 0.5), 13.976717272313131, epsilon = 1e-10);
    }

    #[test]
    fn test_sample_contract_bracket_prices() {
        let call =
            OptionContract::new(2.651, 2.65, 0.03, 28.0 / 365.0, OptionKind::Call).unwrap();
        assert_relative_eq!(price(&call, 0.01).unwrap(), 0.007741749838062972, epsilon = 1e-12);
        assert_relative_eq!(price(&call, 1.0).unwrap(), 0.2951574801805139, epsilon = 1e-12);

        let put = call.with_kind(OptionKind::Put);
        assert_relative_eq!(price(&put, 0.01).unwrap(), 0.0006501319226084323, epsilon = 1e-12);
        assert_relative_eq!(price(&put, 1.0).unwrap(), 0.28806586226505915, epsilon = 1e-12);
    }

    #[test]
    fn test_deep_itm_call() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        let strike = 50.0;
        let intrinsic = 100.0 - strike * (-0.05_f64).exp();
        // Close to the discounted intrinsic value, never below it
        let price = bs.price_call(strike, 1.0);
        assert!(price >= intrinsic - 1e-12);
        assert_relative_eq!(price, intrinsic, epsilon = 1e-2);
    }

    #[test]
    fn test_deep_otm_call() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        let price = bs.price_call(200.0, 1.0);
        assert!(price >= 0.0);
        assert!(price < 0.01);
    }

    #[test]
    fn test_price_dispatches_on_kind() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        assert_eq!(bs.price(OptionKind::Call, 95.0, 0.5), bs.price_call(95.0, 0.5));
        assert_eq!(bs.price(OptionKind::Put, 95.0, 0.5), bs.price_put(95.0, 0.5));
    }

    // ==========================================================
    // Put-call parity
    // ==========================================================

    #[test]
    fn test_put_call_parity_various_strikes() {
        let bs = BlackScholes::new(100.0, 0.05, 0.25).unwrap();
        for strike in [60.0, 90.0, 100.0, 110.0, 150.0] {
            let lhs = bs.price_call(strike, 1.0) - bs.price_put(strike, 1.0);
            let rhs = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(lhs, rhs, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let contract = OptionContract::new(100.0, 105.0, -0.01, 2.0, OptionKind::Call).unwrap();
        let call = price(&contract, 0.3).unwrap();
        let put = price(&contract.with_kind(OptionKind::Put), 0.3).unwrap();
        assert_relative_eq!(
            call - put,
            contract.spot() - contract.discounted_strike(),
            epsilon = 1e-8
        );
    }

    // ==========================================================
    // Monotonicity and vega
    // ==========================================================

    #[test]
    fn test_price_non_decreasing_in_volatility() {
        let contract = atm_call();
        for kind in OptionKind::ALL {
            let contract = contract.with_kind(kind);
            let prices: Vec<f64> = (1..=100)
                .map(|i| price(&contract, i as f64 * 0.01).unwrap())
                .collect();
            for pair in prices.windows(2) {
                assert!(pair[1] >= pair[0], "{kind} price decreased in σ");
            }
        }
    }

    #[test]
    fn test_vega_non_negative() {
        for vol in [0.01, 0.1, 0.5, 1.0] {
            let bs = BlackScholes::new(100.0, 0.05, vol).unwrap();
            for strike in [50.0, 100.0, 200.0] {
                assert!(bs.vega(strike, 1.0) >= 0.0);
            }
        }
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let h = 1e-5;
        let up = BlackScholes::new(100.0, 0.05, 0.2 + h).unwrap();
        let down = BlackScholes::new(100.0, 0.05, 0.2 - h).unwrap();
        let numerical = (up.price_call(100.0, 1.0) - down.price_call(100.0, 1.0)) / (2.0 * h);

        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.vega(100.0, 1.0), numerical, epsilon = 1e-5);
        assert_relative_eq!(bs.vega(100.0, 1.0), 37.52403469169379, epsilon = 1e-10);
    }

    // ==========================================================
    // Free function
    // ==========================================================

    #[test]
    fn test_price_rejects_invalid_volatility() {
        let contract = atm_call();
        assert_eq!(
            price(&contract, -0.1),
            Err(AnalyticalError::InvalidVolatility { volatility: -0.1 })
        );
        assert!(price(&contract, f64::NAN).is_err());
    }

    #[test]
    fn test_price_unchecked_matches_price() {
        let contract = atm_call();
        assert_eq!(price_unchecked(&contract, 0.2), price(&contract, 0.2).unwrap());
    }

    #[test]
    fn test_price_is_deterministic() {
        let contract = atm_call();
        assert_eq!(price(&contract, 0.37).unwrap(), price(&contract, 0.37).unwrap());
    }
}
