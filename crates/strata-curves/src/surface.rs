//! The date × horizon surface and per-date sampling.

use serde::{Deserialize, Serialize};

use strata_core::types::Date;

use crate::error::{CurveError, CurveResult};
use crate::horizon::HorizonGrid;
use crate::interpolation::StepInterpolator;

/// One date's resampled curve: a value per grid column, `None` where
/// evaluation produced nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRow {
    /// Trading date of the row.
    pub reference_date: Date,
    /// Rates aligned to the surface schema. Decimal fractions (0.12 = 12%)
    /// for futures-derived surfaces; published units for benchmark tables.
    pub values: Vec<Option<f64>>,
}

impl SurfaceRow {
    /// Number of populated cells.
    #[must_use]
    pub fn populated(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// True when no cell is populated.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.populated() == 0
    }
}

/// Evaluates one date's interpolant over the horizon grid.
///
/// A failed evaluation at a single horizon becomes a missing cell; it never
/// aborts the row.
#[must_use]
pub fn sample_row(
    reference_date: Date,
    interpolator: &StepInterpolator,
    grid: &HorizonGrid,
) -> SurfaceRow {
    let values = grid
        .horizons()
        .iter()
        .map(|&h| interpolator.rate_at(h).ok())
        .collect();
    SurfaceRow {
        reference_date,
        values,
    }
}

/// An append-only, date-ordered matrix of rates.
///
/// Columns are fixed at construction (the schema); rows are only ever
/// appended in ascending date order and never edited in place. This is the
/// terminal artifact handed to persistence and downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    labels: Vec<String>,
    rows: Vec<SurfaceRow>,
}

impl Surface {
    /// Creates an empty surface with the given column labels.
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            rows: Vec::new(),
        }
    }

    /// Creates an empty surface with one column per grid horizon.
    #[must_use]
    pub fn from_grid(grid: &HorizonGrid) -> Self {
        Self::new(grid.labels())
    }

    /// Returns the column labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the rows in date order.
    #[must_use]
    pub fn rows(&self) -> &[SurfaceRow] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the surface has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the most recent reference date, if any.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.rows.last().map(|r| r.reference_date)
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// - `CurveError::SchemaMismatch` if the row width differs from the
    ///   schema
    /// - `CurveError::AppendOutOfOrder` unless the row is strictly newer
    ///   than the last one (historical rows are never recomputed)
    pub fn append(&mut self, row: SurfaceRow) -> CurveResult<()> {
        if row.values.len() != self.labels.len() {
            return Err(CurveError::SchemaMismatch {
                expected: self.labels.len(),
                got: row.values.len(),
            });
        }
        if let Some(last) = self.last_date() {
            if row.reference_date <= last {
                return Err(CurveError::AppendOutOfOrder {
                    last,
                    got: row.reference_date,
                });
            }
        }
        self.rows.push(row);
        Ok(())
    }

    /// Appends rows in order.
    pub fn append_rows(&mut self, rows: impl IntoIterator<Item = SurfaceRow>) -> CurveResult<()> {
        for row in rows {
            self.append(row)?;
        }
        Ok(())
    }
}
