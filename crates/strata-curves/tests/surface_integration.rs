//! Integration test: settlement table to surface rows, end to end.
//!
//! Exercises the whole per-date path — family filter, curve construction,
//! step interpolation, grid sampling — and the cross-date assembly filters,
//! using a synthetic three-day settlement history.

use strata_core::calendars::WeekendCalendar;
use strata_core::types::{tradable_quotes, Date, SettlementQuote};
use strata_curves::assembler::{assemble, OutlierPolicy};
use strata_curves::curve::Curve;
use strata_curves::horizon::HorizonGrid;
use strata_curves::surface::{sample_row, Surface, SurfaceRow};

fn quote(refdate: Date, commodity: &str, code: &str, settlement: f64) -> SettlementQuote {
    SettlementQuote {
        reference_date: refdate,
        commodity: commodity.to_string(),
        contract: code.parse().unwrap(),
        previous_settlement: settlement,
        settlement,
        change: 0.0,
    }
}

/// Settlement table for one date: a short, a mid, and a long contract,
/// plus noise the pipeline must ignore.
fn settlement_table(refdate: Date, bump: f64) -> Vec<SettlementQuote> {
    vec![
        quote(refdate, "DI1", "F25", 95_000.0 - bump),
        quote(refdate, "DI1", "F27", 76_500.0 - bump),
        quote(refdate, "DI1", "F33", 40_000.0 - bump),
        quote(refdate, "DI1", "N30", 100_000.0), // no-trade placeholder
        quote(refdate, "DOL", "F25", 5_000.0),   // different family
    ]
}

fn build_row(refdate: Date, bump: f64, grid: &HorizonGrid) -> SurfaceRow {
    let quotes = tradable_quotes(&settlement_table(refdate, bump), "DI1");
    let curve = Curve::build(refdate, &quotes, &WeekendCalendar).unwrap();
    sample_row(refdate, &curve.interpolator().unwrap(), grid)
}

#[test]
fn test_three_day_surface() {
    let grid = HorizonGrid::default();
    let days: Vec<Date> = (17..=19)
        .map(|d| Date::from_ymd(2024, 6, d).unwrap())
        .collect();

    let rows: Vec<SurfaceRow> = days
        .iter()
        .enumerate()
        .map(|(i, &d)| build_row(d, i as f64 * 50.0, &grid))
        .collect();

    // Three pillars cover the whole grid, so every cell is populated
    for row in &rows {
        assert_eq!(row.populated(), grid.len());
    }

    // Cheaper settlements mean higher rates: the long end must rise day
    // over day with the bump
    let long_end =
        |row: &SurfaceRow| -> f64 { row.values.last().unwrap().unwrap() };
    assert!(long_end(&rows[1]) > long_end(&rows[0]));
    assert!(long_end(&rows[2]) > long_end(&rows[1]));

    // The long-end minimum is day one; the outlier pass removes exactly it
    let assembled = assemble(rows.clone(), grid.len(), 0.5, OutlierPolicy::DropLongEndMinimum);
    assert_eq!(assembled.len(), 2);
    assert_eq!(assembled[0].reference_date, days[1]);
    assert_eq!(assembled[1].reference_date, days[2]);

    // Assembled rows stack into an append-only surface
    let mut surface = Surface::from_grid(&grid);
    surface.append_rows(assembled).unwrap();
    assert_eq!(surface.len(), 2);
    assert_eq!(surface.last_date(), Some(days[2]));
}

#[test]
fn test_rebuilding_a_row_is_deterministic() {
    let grid = HorizonGrid::default();
    let refdate = Date::from_ymd(2024, 6, 17).unwrap();

    let a = build_row(refdate, 0.0, &grid);
    let b = build_row(refdate, 0.0, &grid);
    assert_eq!(a, b);
}

#[test]
fn test_flat_forward_shape_on_grid() {
    // With two pillars the sampled row must be a two-level step
    let refdate = Date::from_ymd(2024, 6, 17).unwrap();
    let quotes = vec![
        quote(refdate, "DI1", "F25", 95_000.0),
        quote(refdate, "DI1", "F27", 76_500.0),
    ];
    let curve = Curve::build(refdate, &quotes, &WeekendCalendar).unwrap();
    let grid = HorizonGrid::default();
    let row = sample_row(refdate, &curve.interpolator().unwrap(), &grid);

    let short_rate = curve.rates()[0];
    let long_rate = curve.rates()[1];
    let cutover = curve.business_days()[1];

    for (h, value) in grid.horizons().iter().zip(&row.values) {
        let expected = if *h < cutover { short_rate } else { long_rate };
        assert_eq!(value.unwrap(), expected);
    }
}
