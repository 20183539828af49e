//! The incremental batch driver.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use strata_core::calendars::Calendar;
use strata_core::types::{tradable_quotes, Date, SettlementQuote};
use strata_curves::assembler::{assemble, clean_benchmark, BENCHMARK_TENORS};
use strata_curves::curve::Curve;
use strata_curves::error::CurveError;
use strata_curves::horizon::HorizonGrid;
use strata_curves::surface::{sample_row, SurfaceRow};
use strata_store::SurfaceStore;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::feed::{BenchmarkFeed, FeedError, SettlementFeed};

/// What one batch run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Business dates in the unprocessed window.
    pub scanned: usize,
    /// Dates the feed had no data for.
    pub no_data: usize,
    /// Dates whose fetch failed after the retry budget.
    pub failed: usize,
    /// Dates with fewer than two usable curve points.
    pub insufficient: usize,
    /// Rows appended to the store after filtering.
    pub appended: usize,
    /// Last processed business date after the run.
    pub checkpoint: Option<Date>,
}

/// The once-per-day batch: checkpoint → fetch → build → filter → append.
///
/// The checkpoint is not hidden state: it is read from the store at the
/// start of a run and advanced past the processed window only after the
/// batch's surviving rows are durably appended, so a crashed run resumes
/// exactly where the last completed batch ended. It records the last
/// *processed* date rather than the last persisted row: a date whose row
/// the filters dropped stays dropped and is never fetched again.
/// Rebuilding a date is deterministic, which makes re-running after a
/// partial failure safe.
pub struct Pipeline<F, S> {
    feed: F,
    store: S,
    calendar: Arc<dyn Calendar>,
    config: PipelineConfig,
    grid: HorizonGrid,
}

impl<F: SettlementFeed, S: SurfaceStore> Pipeline<F, S> {
    /// Creates a pipeline over the default horizon grid.
    pub fn new(feed: F, store: S, calendar: Arc<dyn Calendar>, config: PipelineConfig) -> Self {
        Self {
            feed,
            store,
            calendar,
            config,
            grid: HorizonGrid::default(),
        }
    }

    /// Replaces the horizon grid.
    #[must_use]
    pub fn with_grid(mut self, grid: HorizonGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Runs one batch, processing every business date strictly after the
    /// checkpoint through yesterday.
    ///
    /// Per-date problems (feed failure, nothing published, too few points)
    /// are logged and skipped. Only a store failure aborts the run.
    pub async fn run(&self, today: Date) -> PipelineResult<BatchSummary> {
        // Stores written before checkpoint records fall back to their last
        // persisted row.
        let checkpoint = match self.store.checkpoint().await? {
            Some(date) => date,
            None => self.store.last_date().await?.unwrap_or(self.config.epoch),
        };
        let window_end = today.add_days(-1);
        let dates = self
            .calendar
            .sequence(checkpoint.add_days(1), window_end);
        info!(
            %checkpoint,
            dates = dates.len(),
            calendar = self.calendar.name(),
            "starting surface batch"
        );

        let mut summary = BatchSummary {
            scanned: dates.len(),
            no_data: 0,
            failed: 0,
            insufficient: 0,
            appended: 0,
            checkpoint: None,
        };

        let window_last = dates.last().copied();
        let mut fetched: Vec<(Date, Vec<SettlementQuote>)> = Vec::new();
        for date in dates {
            match self.fetch_with_retry(date).await {
                Ok(Some(quotes)) => {
                    fetched.push((date, tradable_quotes(&quotes, &self.config.commodity)));
                }
                Ok(None) => {
                    info!(%date, "no settlement data published");
                    summary.no_data += 1;
                }
                Err(e) => {
                    warn!(%date, error = %e, "fetch failed, skipping date");
                    summary.failed += 1;
                }
            }
        }

        // Dates are independent, so rows build in parallel. The rayon join
        // would otherwise block the async executor, hence spawn_blocking;
        // the ordered append below restores chronology.
        let fetched_count = fetched.len();
        let calendar = Arc::clone(&self.calendar);
        let grid = self.grid.clone();
        let rows = tokio::task::spawn_blocking(move || {
            fetched
                .par_iter()
                .filter_map(|(date, quotes)| build_row(*date, quotes, &*calendar, &grid))
                .collect::<Vec<SurfaceRow>>()
        })
        .await
        .map_err(|e| PipelineError::Task(e.to_string()))?;
        summary.insufficient = fetched_count - rows.len();

        let kept = assemble(
            rows,
            self.grid.len(),
            self.config.min_fill,
            self.config.outlier_policy,
        );
        self.store.append_rows(&kept).await?;
        summary.appended = kept.len();

        // Every date in the window is now processed, including the ones
        // whose rows the filters dropped; none of them may come back.
        match window_last {
            Some(last) => {
                self.store.advance_checkpoint(last).await?;
                summary.checkpoint = Some(last);
            }
            None => summary.checkpoint = self.store.checkpoint().await?,
        }

        info!(
            appended = summary.appended,
            no_data = summary.no_data,
            failed = summary.failed,
            insufficient = summary.insufficient,
            "surface batch finished"
        );
        Ok(summary)
    }

    /// Fetches one date within the timeout and retry budget.
    async fn fetch_with_retry(
        &self,
        date: Date,
    ) -> Result<Option<Vec<SettlementQuote>>, FeedError> {
        let attempts = 1 + self.config.fetch_retries;
        let mut last_error = FeedError::Timeout;
        for attempt in 1..=attempts {
            match tokio::time::timeout(self.config.fetch_timeout(), self.feed.settlements(date))
                .await
            {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => {
                    debug!(%date, attempt, error = %e, "fetch attempt failed");
                    last_error = e;
                }
                Err(_) => {
                    debug!(%date, attempt, "fetch attempt timed out");
                    last_error = FeedError::Timeout;
                }
            }
        }
        Err(last_error)
    }
}

/// Builds and samples one date's row, or skips the date.
fn build_row(
    date: Date,
    quotes: &[SettlementQuote],
    calendar: &dyn Calendar,
    grid: &HorizonGrid,
) -> Option<SurfaceRow> {
    let curve = match Curve::build(date, quotes, calendar) {
        Ok(curve) => curve,
        Err(CurveError::InsufficientPoints { got, .. }) => {
            info!(%date, points = got, "insufficient curve data, skipping date");
            return None;
        }
        Err(e) => {
            warn!(%date, error = %e, "curve construction failed, skipping date");
            return None;
        }
    };
    match curve.interpolator() {
        Ok(interp) => Some(sample_row(date, &interp, grid)),
        Err(e) => {
            warn!(%date, error = %e, "interpolation failed, skipping date");
            None
        }
    }
}

/// Refreshes the benchmark surface: clean the published table and append
/// the observations newer than what the store already has.
///
/// The benchmark path has no interpolation and no outlier pass; the table
/// arrives keyed on the fixed tenor set.
pub async fn sync_benchmark(
    feed: &dyn BenchmarkFeed,
    store: &dyn SurfaceStore,
    min_fill: f64,
) -> PipelineResult<usize> {
    let table = feed.yields().await?;
    let cleaned = clean_benchmark(table, &BENCHMARK_TENORS, min_fill);

    let last = store.last_date().await?;
    let fresh: Vec<SurfaceRow> = cleaned
        .rows()
        .iter()
        .filter(|row| last.map_or(true, |l| row.reference_date > l))
        .cloned()
        .collect();
    store.append_rows(&fresh).await?;

    info!(appended = fresh.len(), "benchmark surface refreshed");
    Ok(fresh.len())
}
