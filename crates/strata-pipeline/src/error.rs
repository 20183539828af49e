//! Error types for pipeline operations.

use thiserror::Error;

use crate::feed::FeedError;
use strata_curves::error::CurveError;
use strata_store::StoreError;

/// A specialized Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type for pipeline operations.
///
/// Per-date feed failures are handled inside the driver and do not show up
/// here; what does is anything that invalidates the whole batch.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A feed call failed outside the per-date skip path.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Persistence failed. Always fatal for the run: continuing would risk
    /// advancing the checkpoint past rows that were never written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Curve or surface construction failed outside the per-date skip path.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// A background row-build task failed to complete.
    #[error("task failed: {0}")]
    Task(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_is_transparent() {
        let err = PipelineError::from(StoreError::Io("disk full".into()));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_config_error_display() {
        let err = PipelineError::Config("missing epoch".into());
        assert!(err.to_string().contains("missing epoch"));
    }
}
