//! Per-date curve construction from settlement quotes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use strata_core::calendars::Calendar;
use strata_core::types::{Date, SettlementQuote};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::StepInterpolator;
use crate::rate::implied_rate;

/// One pillar of a yield curve, derived deterministically from a
/// settlement quote and a calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Trading date the curve belongs to.
    pub reference_date: Date,
    /// Contract maturity rolled to the next business day.
    pub maturity: Date,
    /// Business days from reference date to maturity. Always positive.
    pub business_days: i64,
    /// Effective annualized rate (decimal fraction, 252 convention).
    pub rate: f64,
    /// Settlement price the rate was derived from.
    pub price: f64,
}

/// A single date's yield curve: deduplicated pillars sorted by horizon.
///
/// Construction guarantees at least two pillars with strictly increasing,
/// positive business-day horizons; anything less is reported as
/// insufficient data and produces no surface row for the date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    reference_date: Date,
    points: Vec<CurvePoint>,
}

impl Curve {
    /// Builds a curve from one date's settlement quotes.
    ///
    /// Callers restrict the table to one product family and remove
    /// no-trade placeholders first (see
    /// [`tradable_quotes`](strata_core::types::tradable_quotes)); rows that
    /// slip through without a usable price are skipped here as well.
    ///
    /// For each quote: the raw contract maturity is rolled forward with
    /// `following`, the horizon is the business-day count from
    /// `reference_date`, and the rate comes from
    /// [`implied_rate`](crate::rate::implied_rate). Points at or before
    /// the reference date are discarded. When two contracts land on the
    /// same horizon the first one in table order wins.
    ///
    /// # Errors
    ///
    /// - `CurveError::InsufficientPoints` when fewer than 2 distinct
    ///   horizons remain
    /// - `CurveError::InvalidQuote` when a quote for a different reference
    ///   date is mixed in
    pub fn build(
        reference_date: Date,
        quotes: &[SettlementQuote],
        calendar: &dyn Calendar,
    ) -> CurveResult<Self> {
        let mut points = Vec::with_capacity(quotes.len());
        let mut seen = HashSet::new();

        for quote in quotes {
            if quote.reference_date != reference_date {
                return Err(CurveError::invalid_quote(format!(
                    "quote dated {} in batch for {}",
                    quote.reference_date, reference_date
                )));
            }
            if !quote.is_tradable() {
                continue;
            }

            let raw_maturity = quote
                .contract
                .maturity()
                .map_err(|e| CurveError::invalid_quote(e.to_string()))?;
            let maturity = calendar.following(raw_maturity);
            let business_days = calendar.business_days_between(reference_date, maturity);
            if business_days <= 0 {
                continue;
            }
            // First-seen wins on duplicate horizons
            if !seen.insert(business_days) {
                continue;
            }

            let rate = implied_rate(quote.settlement, business_days)?;
            points.push(CurvePoint {
                reference_date,
                maturity,
                business_days,
                rate,
                price: quote.settlement,
            });
        }

        if points.len() < 2 {
            return Err(CurveError::insufficient_points(2, points.len()));
        }
        points.sort_by_key(|p| p.business_days);

        Ok(Self {
            reference_date,
            points,
        })
    }

    /// Returns the reference date.
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Returns the pillars, sorted ascending by horizon.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the number of pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A built curve always has at least two pillars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the pillar horizons in business days.
    #[must_use]
    pub fn business_days(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.business_days).collect()
    }

    /// Returns the pillar rates.
    #[must_use]
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate).collect()
    }

    /// Builds the step interpolant over this curve's pillars.
    pub fn interpolator(&self) -> CurveResult<StepInterpolator> {
        StepInterpolator::new(self.business_days(), self.rates())
    }
}
