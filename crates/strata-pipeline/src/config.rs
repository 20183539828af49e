//! Pipeline configuration.

use std::time::Duration;

use serde::Deserialize;

use strata_core::types::Date;
use strata_curves::assembler::OutlierPolicy;

use crate::error::{PipelineError, PipelineResult};

/// Configuration for one pipeline instance.
///
/// Loadable from TOML; every field has a default so a partial file (or
/// none at all) works.
///
/// ```toml
/// commodity = "DI1"
/// epoch = "2020-01-01"
/// fetch_timeout_secs = 30
/// fetch_retries = 2
/// min_fill = 0.5
/// outlier_policy = "drop_long_end_minimum"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Product family retained from the settlement table.
    pub commodity: String,
    /// Checkpoint used when the store is empty: processing starts at the
    /// first business day after this date.
    pub epoch: Date,
    /// Timeout per fetch attempt, in seconds.
    pub fetch_timeout_secs: u64,
    /// Retries after the first failed attempt, per date.
    pub fetch_retries: u32,
    /// Minimum populated fraction for a row to survive the completeness
    /// filter.
    pub min_fill: f64,
    /// Long-end outlier handling.
    pub outlier_policy: OutlierPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            commodity: "DI1".to_string(),
            epoch: Date::from_ymd(2020, 1, 1).expect("static epoch is a valid date"),
            fetch_timeout_secs: 30,
            fetch_retries: 2,
            min_fill: 0.5,
            outlier_policy: OutlierPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> PipelineResult<Self> {
        toml::from_str(text).map_err(|e| PipelineError::Config(e.to_string()))
    }

    /// Returns the per-attempt fetch timeout.
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
