//! European vanilla option contract.

use super::OptionKind;
use crate::analytical::AnalyticalError;

/// Days per year used to turn calendar days into a year fraction (ACT/365).
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Converts a number of calendar days to a year fraction on an ACT/365 basis.
///
/// # Examples
/// ```
/// use pricer_models::instruments::year_fraction_from_days;
///
/// assert!((year_fraction_from_days(28.0) - 28.0 / 365.0).abs() < 1e-15);
/// ```
#[inline]
pub fn year_fraction_from_days(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Immutable description of a European vanilla option.
///
/// Construction validates the pricing domain once so that downstream
/// pricing never sees a non-positive spot, strike or expiry.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(2.651, 2.65, 0.03, 28.0 / 365.0, OptionKind::Call).unwrap();
/// assert_eq!(contract.kind(), OptionKind::Call);
///
/// assert!(OptionContract::new(0.0, 2.65, 0.03, 0.1, OptionKind::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    kind: OptionKind,
}

impl OptionContract {
    /// Creates a new contract.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `rate` - Continuously compounded risk-free rate r (any finite value)
    /// * `expiry` - Time to expiry T in years (must be positive)
    /// * `kind` - Call or put
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidStrike` if strike <= 0 or not finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidExpiry` if expiry <= 0 or not finite
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        expiry: f64,
        kind: OptionKind,
    ) -> Result<Self, AnalyticalError> {
        if !is_positive(spot) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !is_positive(strike) {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate });
        }
        if !is_positive(expiry) {
            return Err(AnalyticalError::InvalidExpiry { expiry });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            expiry,
            kind,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Same contract terms with a different option kind.
    ///
    /// Already-validated fields are reused, so this cannot fail.
    #[inline]
    pub fn with_kind(&self, kind: OptionKind) -> Self {
        Self { kind, ..*self }
    }

    /// Present value of the strike, K·e^(−rT).
    #[inline]
    pub fn discounted_strike(&self) -> f64 {
        self.strike * (-self.rate * self.expiry).exp()
    }
}

#[inline]
pub(crate) fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}
