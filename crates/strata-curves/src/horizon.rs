//! The fixed maturity horizon grid.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Business-day horizons every per-date curve is resampled onto.
///
/// Roughly monthly near the short end, widening to yearly at the long end,
/// derived from the market calendar (21 business days ≈ one month,
/// 252 ≈ one year). 37 points from one month to roughly 34 years.
pub const DEFAULT_HORIZONS: [i64; 37] = [
    21, 63, 126, 252, 504, 756, 1008, 1260, 1512, 1764, 2016, 2268, 2520, 2772, 3024, 3276, 3528,
    3780, 4032, 4284, 4536, 4788, 5040, 5292, 5544, 5796, 6048, 6300, 6552, 6804, 7068, 7308,
    7560, 7812, 8064, 8316, 8558,
];

/// An immutable, ascending sequence of business-day horizons.
///
/// The grid is what makes different dates comparable: each date's curve is
/// evaluated at exactly these horizons, producing aligned columns of one
/// matrix. The default grid is process-wide and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizonGrid {
    horizons: Vec<i64>,
}

impl HorizonGrid {
    /// Creates a grid from explicit horizons.
    ///
    /// # Errors
    ///
    /// - `CurveError::InvalidHorizon` on an empty grid or a non-positive
    ///   first horizon
    /// - `CurveError::NonMonotonicHorizons` unless strictly increasing
    pub fn new(horizons: Vec<i64>) -> CurveResult<Self> {
        match horizons.first() {
            None => return Err(CurveError::invalid_horizon(0, "grid must not be empty")),
            Some(&first) if first <= 0 => {
                return Err(CurveError::invalid_horizon(
                    first,
                    "grid horizons must be positive",
                ));
            }
            Some(_) => {}
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
        Ok(Self { horizons })
    }

    /// Returns the horizons in ascending order.
    #[must_use]
    pub fn horizons(&self) -> &[i64] {
        &self.horizons
    }

    /// Returns the number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.horizons.len()
    }

    /// A validated grid is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.horizons.is_empty()
    }

    /// Returns the longest horizon.
    #[must_use]
    pub fn longest(&self) -> i64 {
        *self
            .horizons
            .last()
            .expect("construction guarantees a non-empty grid")
    }

    /// Returns the column labels (`"21d"`, `"63d"`, ...).
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.horizons.iter().map(|h| format!("{h}d")).collect()
    }
}

impl Default for HorizonGrid {
    fn default() -> Self {
        Self {
            horizons: DEFAULT_HORIZONS.to_vec(),
        }
    }
}
