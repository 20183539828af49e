//! Market data feed traits.
//!
//! Network retrieval itself lives outside this workspace; these traits are
//! the seam it plugs into. A settlement feed answers "what did the
//! exchange publish for this date", a benchmark feed returns the full
//! date-indexed table of published yields.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use strata_core::types::{Date, SettlementQuote};
use strata_curves::assembler::BenchmarkRow;

/// Error type for feed operations.
#[derive(Error, Debug, Clone)]
pub enum FeedError {
    /// Transport-level failure.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response could not be parsed into quotes.
    #[error("parse error: {0}")]
    ParseError(String),

    /// The fetch exceeded its timeout budget.
    #[error("timeout")]
    Timeout,

    /// The source is not available.
    #[error("source not available: {0}")]
    SourceNotAvailable(String),
}

/// Source of daily futures settlement tables.
///
/// `Ok(None)` is the explicit "nothing published for this date" signal
/// (e.g. an exchange holiday the calendar missed) and is not an error.
#[async_trait]
pub trait SettlementFeed: Send + Sync {
    /// Fetches all settlement quotes published for a reference date.
    async fn settlements(
        &self,
        reference_date: Date,
    ) -> Result<Option<Vec<SettlementQuote>>, FeedError>;
}

/// Source of the benchmark yield table.
#[async_trait]
pub trait BenchmarkFeed: Send + Sync {
    /// Fetches the full date-indexed table of published benchmark yields.
    async fn yields(&self) -> Result<Vec<BenchmarkRow>, FeedError>;
}

/// An in-memory settlement feed.
///
/// Used in tests and for replaying captured settlement tables; dates it
/// knows nothing about answer `Ok(None)`, dates listed as failing return a
/// connection error on every attempt.
#[derive(Debug, Default)]
pub struct StaticFeed {
    tables: HashMap<Date, Vec<SettlementQuote>>,
    failing: Vec<Date>,
}

impl StaticFeed {
    /// Creates an empty feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the settlement table for a date.
    pub fn insert(&mut self, date: Date, quotes: Vec<SettlementQuote>) {
        self.tables.insert(date, quotes);
    }

    /// Marks a date as permanently failing.
    pub fn fail_on(&mut self, date: Date) {
        self.failing.push(date);
    }
}

#[async_trait]
impl SettlementFeed for StaticFeed {
    async fn settlements(
        &self,
        reference_date: Date,
    ) -> Result<Option<Vec<SettlementQuote>>, FeedError> {
        if self.failing.contains(&reference_date) {
            return Err(FeedError::ConnectionFailed(format!(
                "no route to exchange for {reference_date}"
            )));
        }
        Ok(self.tables.get(&reference_date).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_feed_answers() {
        let date = Date::from_ymd(2024, 6, 17).unwrap();
        let mut feed = StaticFeed::new();
        feed.insert(date, vec![]);
        feed.fail_on(date + 1);

        assert_eq!(feed.settlements(date).await.unwrap(), Some(vec![]));
        assert_eq!(feed.settlements(date + 2).await.unwrap(), None);
        assert!(matches!(
            feed.settlements(date + 1).await,
            Err(FeedError::ConnectionFailed(_))
        ));
    }
}
