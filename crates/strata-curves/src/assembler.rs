//! Row filtering and surface assembly.
//!
//! Sampled rows pass through two cleaning steps before they enter the
//! surface: a completeness filter (rows with too many missing cells carry
//! no information) and an optional long-end outlier drop. The benchmark
//! path gets the simpler variant: blank-row removal, date ordering, a
//! fixed tenor schema, and the same completeness filter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use strata_core::types::Date;

use crate::surface::{Surface, SurfaceRow};

/// Published tenor labels of the benchmark yield table, shortest first.
pub const BENCHMARK_TENORS: [&str; 9] = ["1M", "3M", "6M", "1Y", "2Y", "3Y", "5Y", "10Y", "30Y"];

/// Policy for the long-end outlier pass.
///
/// `DropLongEndMinimum` reproduces the historical cleanup: remove exactly
/// the one row with the minimum value in the longest-horizon column. This
/// is a blunt compatibility heuristic aimed at a single known bad
/// observation, not a statistical outlier test, so it is a policy choice
/// rather than a hard-wired step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierPolicy {
    /// Keep all rows.
    None,
    /// Drop the single row with the minimum long-end value.
    #[default]
    DropLongEndMinimum,
}

/// Keeps rows whose populated cell count reaches `min_fill` of the schema
/// width.
///
/// With the default `min_fill = 0.5` and the 37-column grid, rows need at
/// least 19 populated cells to survive.
#[must_use]
pub fn retain_complete(rows: Vec<SurfaceRow>, width: usize, min_fill: f64) -> Vec<SurfaceRow> {
    let threshold = min_fill * width as f64;
    rows.into_iter()
        .filter(|row| row.populated() as f64 >= threshold)
        .collect()
}

/// Removes the single row with the minimum value in the last column.
///
/// No-op when the last column has no populated values or when at most one
/// row remains. Ties resolve to the earliest row.
pub fn drop_long_end_minimum(rows: &mut Vec<SurfaceRow>) {
    if rows.len() <= 1 {
        return;
    }

    let mut min_idx: Option<usize> = None;
    let mut min_value = f64::INFINITY;
    for (i, row) in rows.iter().enumerate() {
        if let Some(Some(value)) = row.values.last() {
            if *value < min_value {
                min_value = *value;
                min_idx = Some(i);
            }
        }
    }

    if let Some(idx) = min_idx {
        rows.remove(idx);
    }
}

/// Cleans sampled rows and stacks them into date order.
///
/// Order of operations: sort ascending by date, completeness filter, then
/// the configured outlier policy.
#[must_use]
pub fn assemble(
    mut rows: Vec<SurfaceRow>,
    width: usize,
    min_fill: f64,
    policy: OutlierPolicy,
) -> Vec<SurfaceRow> {
    rows.sort_by_key(|r| r.reference_date);
    let mut rows = retain_complete(rows, width, min_fill);
    if policy == OutlierPolicy::DropLongEndMinimum {
        drop_long_end_minimum(&mut rows);
    }
    rows
}

/// One published benchmark observation: tenor label → yield, in the
/// feed's published units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    /// Observation date.
    pub date: Date,
    /// Published yields keyed by tenor label; absent tenors are missing.
    pub yields: BTreeMap<String, f64>,
}

/// Cleans a benchmark yield table into a fixed-schema surface.
///
/// Blank observations are dropped, dates sorted ascending, values
/// restricted and reordered to `tenors`, and the completeness filter
/// applied over that schema. No outlier pass — only the futures-derived
/// surface carries that heuristic. Duplicate observation dates keep the
/// first occurrence.
#[must_use]
pub fn clean_benchmark(mut rows: Vec<BenchmarkRow>, tenors: &[&str], min_fill: f64) -> Surface {
    rows.sort_by_key(|r| r.date);

    let aligned: Vec<SurfaceRow> = rows
        .into_iter()
        .map(|row| SurfaceRow {
            reference_date: row.date,
            values: tenors.iter().map(|t| row.yields.get(*t).copied()).collect(),
        })
        .filter(|row| !row.is_blank())
        .collect();

    let kept = retain_complete(aligned, tenors.len(), min_fill);

    let mut surface = Surface::new(tenors.iter().map(|t| (*t).to_string()).collect());
    for row in kept {
        // Re-sorted and deduplicated above; an out-of-order append here
        // means a duplicate date, which we skip.
        let _ = surface.append(row);
    }
    surface
}
