//! # Strata Pipeline
//!
//! The once-per-business-day batch that keeps the rate surface current.
//!
//! The driver reads its checkpoint (the last date already in the persisted
//! surface), asks the calendar for the unprocessed business dates up to
//! yesterday, fetches each date's settlement table from the feed, builds
//! and samples a curve per date, filters the resulting rows, and appends
//! the survivors to the store in ascending date order. One bad date never
//! aborts the batch; a persistence failure always does.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strata_pipeline::prelude::*;
//!
//! let pipeline = Pipeline::new(feed, store, Arc::new(calendar), PipelineConfig::default());
//! let summary = pipeline.run(Date::today()).await?;
//! println!("appended {} rows", summary.appended);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod driver;
pub mod error;
pub mod feed;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::PipelineConfig;
    pub use crate::driver::{sync_benchmark, BatchSummary, Pipeline};
    pub use crate::error::{PipelineError, PipelineResult};
    pub use crate::feed::{BenchmarkFeed, FeedError, SettlementFeed, StaticFeed};
}

pub use config::PipelineConfig;
pub use driver::{sync_benchmark, BatchSummary, Pipeline};
pub use error::{PipelineError, PipelineResult};
pub use feed::{BenchmarkFeed, FeedError, SettlementFeed};
