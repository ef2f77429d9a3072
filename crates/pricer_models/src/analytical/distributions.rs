//! Standard normal distribution functions.
//!
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is evaluated through the complementary error function from
//! `statrs`, which keeps full double precision in both tails. Low-order
//! polynomial fits (Abramowitz-Stegun 7.1.26 and friends) are only good to
//! ~1e-7 and are not used here.

use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½ · erfc(−x / √2)
///
/// # Accuracy
/// Absolute error below 1e-15 over the whole real line; relative error
/// stays small deep in the lower tail because erfc is used directly
/// instead of `1 − erf`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-14);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / √(2π)) · exp(−x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
