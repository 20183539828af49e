//! Discount price to annualized rate conversion.
//!
//! Daily settlement prices are discount prices ("PU"): the present value of
//! a fixed 100,000 redemption at maturity. Under the 252 business-day
//! convention the effective annualized rate implied by a price `P` with
//! `DU` business days to maturity is:
//!
//! ```text
//! rate = (100000 / P) ^ (252 / DU) - 1
//! ```
//!
//! A smaller price implies a higher rate. Rates are decimal fractions
//! (0.12 = 12%).

use crate::error::{CurveError, CurveResult};

/// Redemption value of one contract at maturity.
pub const NOTIONAL: f64 = 100_000.0;

/// Business days per year under the 252 convention.
pub const BUSINESS_DAYS_PER_YEAR: f64 = 252.0;

/// Converts a discount price and business-day count to an effective
/// annualized rate.
///
/// Pure function, no clamping: out-of-domain inputs are rejected, never
/// silently adjusted.
///
/// # Errors
///
/// - `CurveError::InvalidHorizon` if `business_days <= 0`
/// - `CurveError::InvalidPrice` if `price` is non-positive or non-finite
///
/// # Example
///
/// ```rust
/// use strata_curves::rate::implied_rate;
///
/// // One year out (252 business days) at a 10% discount
/// let rate = implied_rate(90_909.09, 252).unwrap();
/// assert!((rate - 0.10).abs() < 1e-4);
/// ```
pub fn implied_rate(price: f64, business_days: i64) -> CurveResult<f64> {
    if business_days <= 0 {
        return Err(CurveError::invalid_horizon(
            business_days,
            "business days to maturity must be positive",
        ));
    }
    if !price.is_finite() || price <= 0.0 {
        return Err(CurveError::invalid_price(
            price,
            "discount price must be positive",
        ));
    }

    let years = business_days as f64 / BUSINESS_DAYS_PER_YEAR;
    Ok((NOTIONAL / price).powf(1.0 / years) - 1.0)
}
