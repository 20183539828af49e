//! # Strata Curves
//!
//! Yield curve construction and surface assembly for the Strata library.
//!
//! This crate turns one day's futures settlement table into a row of a
//! date × horizon rate surface:
//!
//! - **Rate conversion**: discount price → effective annualized rate
//!   (252 business-day convention)
//! - **Curve**: deduplicated, sorted (business days, rate) pillars per
//!   reference date
//! - **Interpolation**: previous-hold step function with constant-hold
//!   extrapolation at both boundaries
//! - **Horizon grid**: the fixed 37-point maturity grid all curves are
//!   resampled onto
//! - **Surface**: append-only date × horizon matrix plus the row filters
//!   (completeness, long-end outlier) and benchmark-table cleaning
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_core::prelude::*;
//! use strata_curves::prelude::*;
//!
//! let refdate = Date::from_ymd(2024, 6, 14).unwrap();
//! let quotes = vec![
//!     SettlementQuote {
//!         reference_date: refdate,
//!         commodity: "DI1".into(),
//!         contract: "F25".parse().unwrap(),
//!         previous_settlement: 95_400.0,
//!         settlement: 95_380.0,
//!         change: -20.0,
//!     },
//!     SettlementQuote {
//!         reference_date: refdate,
//!         commodity: "DI1".into(),
//!         contract: "F27".parse().unwrap(),
//!         previous_settlement: 76_510.0,
//!         settlement: 76_500.0,
//!         change: -10.0,
//!     },
//! ];
//!
//! let curve = Curve::build(refdate, &quotes, &WeekendCalendar).unwrap();
//! let interp = curve.interpolator().unwrap();
//! let grid = HorizonGrid::default();
//! let row = sample_row(refdate, &interp, &grid);
//! assert_eq!(row.values.len(), grid.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod assembler;
pub mod curve;
pub mod error;
pub mod horizon;
pub mod interpolation;
pub mod rate;
pub mod surface;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::assembler::{
        clean_benchmark, drop_long_end_minimum, retain_complete, BenchmarkRow, OutlierPolicy,
        BENCHMARK_TENORS,
    };
    pub use crate::curve::{Curve, CurvePoint};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::horizon::HorizonGrid;
    pub use crate::interpolation::StepInterpolator;
    pub use crate::rate::{implied_rate, BUSINESS_DAYS_PER_YEAR, NOTIONAL};
    pub use crate::surface::{sample_row, Surface, SurfaceRow};
}

pub use curve::{Curve, CurvePoint};
pub use error::{CurveError, CurveResult};
pub use horizon::HorizonGrid;
pub use interpolation::StepInterpolator;
pub use surface::{sample_row, Surface, SurfaceRow};
