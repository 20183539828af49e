//! Previous-hold step interpolation.
//!
//! The market convention for these curves is that the forward rate implied
//! between two quoted maturities is flat, so the resampled curve is a step
//! function: a query horizon takes the rate of the nearest pillar at or
//! before it. Outside the observed range the nearest boundary value is
//! held constant — there is no linear extrapolation at either end. This
//! boundary behavior is deliberate and part of the contract, not a library
//! default.

use crate::error::{CurveError, CurveResult};

/// A step-function interpolant over (business days, rate) pillars.
///
/// Stateless once built and owned by the reference date it was built for;
/// evaluating it any number of times, at any horizon, always yields the
/// same result.
///
/// # Example
///
/// ```rust
/// use strata_curves::interpolation::StepInterpolator;
///
/// let interp = StepInterpolator::new(vec![5, 60], vec![0.10, 0.12]).unwrap();
/// assert_eq!(interp.rate_at(30).unwrap(), 0.10); // hold of nearest prior pillar
/// assert_eq!(interp.rate_at(100).unwrap(), 0.12); // boundary hold above
/// assert_eq!(interp.rate_at(1).unwrap(), 0.10); // boundary hold below
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StepInterpolator {
    horizons: Vec<i64>,
    rates: Vec<f64>,
}

impl StepInterpolator {
    /// Creates a step interpolant from pillar horizons and rates.
    ///
    /// # Errors
    ///
    /// - `CurveError::InsufficientPoints` for fewer than 2 pillars
    /// - `CurveError::InterpolationError` on length mismatch or non-finite
    ///   rates
    /// - `CurveError::NonMonotonicHorizons` unless horizons strictly
    ///   increase
    /// - `CurveError::InvalidHorizon` if the first pillar is not a positive
    ///   horizon
    pub fn new(horizons: Vec<i64>, rates: Vec<f64>) -> CurveResult<Self> {
        if horizons.len() < 2 {
            return Err(CurveError::insufficient_points(2, horizons.len()));
        }
        if horizons.len() != rates.len() {
            return Err(CurveError::interpolation_error(format!(
                "horizons and rates must have same length: {} vs {}",
                horizons.len(),
                rates.len()
            )));
        }
        if horizons[0] <= 0 {
            return Err(CurveError::invalid_horizon(
                horizons[0],
                "pillar horizons must be positive",
            ));
        }
        for i in 1..horizons.len() {
            if horizons[i] <= horizons[i - 1] {
                return Err(CurveError::non_monotonic_horizons(
                    i,
                    horizons[i - 1],
                    horizons[i],
                ));
            }
        }
        if let Some(bad) = rates.iter().find(|r| !r.is_finite()) {
            return Err(CurveError::interpolation_error(format!(
                "non-finite pillar rate {bad}"
            )));
        }

        Ok(Self { horizons, rates })
    }

    /// Evaluates the curve at a business-day horizon.
    ///
    /// Returns the rate of the greatest pillar horizon `<= h`; below the
    /// first pillar the first rate, above the last pillar the last rate.
    ///
    /// # Errors
    ///
    /// `CurveError::InvalidHorizon` for non-positive query horizons.
    pub fn rate_at(&self, h: i64) -> CurveResult<f64> {
        if h <= 0 {
            return Err(CurveError::invalid_horizon(
                h,
                "query horizon must be positive",
            ));
        }

        // Index of the first pillar strictly past h
        let idx = self.horizons.partition_point(|&x| x <= h);
        if idx == 0 {
            Ok(self.rates[0])
        } else {
            Ok(self.rates[idx - 1])
        }
    }

    /// Returns the shortest pillar horizon.
    #[must_use]
    pub fn min_horizon(&self) -> i64 {
        self.horizons[0]
    }

    /// Returns the longest pillar horizon.
    #[must_use]
    pub fn max_horizon(&self) -> i64 {
        *self
            .horizons
            .last()
            .expect("construction guarantees at least two pillars")
    }
}
