//! # Strata Store
//!
//! Persistence for the rate surface: an append-only table keyed by
//! reference date.
//!
//! The contract is deliberately narrow: the incremental driver only ever
//! reads the last key, appends newer rows, and tracks the last processed
//! date as an explicit checkpoint record. Backends are extensions:
//!
//! - [`MemoryStore`]: in-process, for tests and dry runs
//! - [`JsonlStore`]: one JSON document per row, appended to a file
//!
//! Writers must serialize appends (single-writer discipline); a reader
//! only ever sees committed, complete rows.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod file;
mod memory;

pub use file::JsonlStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use strata_core::types::Date;
use strata_curves::surface::SurfaceRow;

/// A specialized Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Stored data violates the append-only date ordering.
    #[error("corrupt store: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Storage backend for an append-only surface table.
///
/// Rows are keyed by reference date in ascending order. Implementations
/// must make `append_rows` durable before returning: the driver advances
/// its checkpoint only past rows that were written successfully.
///
/// The checkpoint is recorded separately from the rows because the two can
/// diverge: a date whose row the filters dropped was still processed, and
/// must not be re-entered into the work window on the next run.
#[async_trait]
pub trait SurfaceStore: Send + Sync {
    /// Returns the most recent reference date in the store, if any.
    async fn last_date(&self) -> StoreResult<Option<Date>>;

    /// Appends rows, which must be strictly newer than `last_date` and
    /// ascending among themselves.
    async fn append_rows(&self, rows: &[SurfaceRow]) -> StoreResult<()>;

    /// Loads all rows in date order.
    async fn load(&self) -> StoreResult<Vec<SurfaceRow>>;

    /// Returns the last processed business date, if one was recorded.
    async fn checkpoint(&self) -> StoreResult<Option<Date>>;

    /// Records `date` as the last processed business date. Moving the
    /// checkpoint backwards is a no-op.
    async fn advance_checkpoint(&self, date: Date) -> StoreResult<()>;
}

/// Validates that `rows` ascend strictly and start after `last`.
///
/// Shared by backends so both enforce the same append-only contract.
pub(crate) fn check_append_order(last: Option<Date>, rows: &[SurfaceRow]) -> StoreResult<()> {
    let mut prev = last;
    for row in rows {
        if let Some(p) = prev {
            if row.reference_date <= p {
                return Err(StoreError::Corrupt(format!(
                    "append-only violation: row {} is not after {}",
                    row.reference_date, p
                )));
            }
        }
        prev = Some(row.reference_date);
    }
    Ok(())
}
