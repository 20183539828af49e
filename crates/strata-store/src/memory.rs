//! In-memory surface store.

use async_trait::async_trait;
use parking_lot::RwLock;

use strata_core::types::Date;
use strata_curves::surface::SurfaceRow;

use crate::{check_append_order, StoreResult, SurfaceStore};

/// An in-memory store, useful for tests and dry runs.
///
/// Appends are serialized by the interior lock; the append-only date
/// ordering is enforced exactly like the durable backends.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<SurfaceRow>>,
    checkpoint: RwLock<Option<Date>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with rows (assumed date-ordered).
    #[must_use]
    pub fn with_rows(rows: Vec<SurfaceRow>) -> Self {
        Self {
            rows: RwLock::new(rows),
            checkpoint: RwLock::new(None),
        }
    }
}

#[async_trait]
impl SurfaceStore for MemoryStore {
    async fn last_date(&self) -> StoreResult<Option<Date>> {
        Ok(self.rows.read().last().map(|r| r.reference_date))
    }

    async fn append_rows(&self, rows: &[SurfaceRow]) -> StoreResult<()> {
        let mut guard = self.rows.write();
        check_append_order(guard.last().map(|r| r.reference_date), rows)?;
        guard.extend_from_slice(rows);
        Ok(())
    }

    async fn load(&self) -> StoreResult<Vec<SurfaceRow>> {
        Ok(self.rows.read().clone())
    }

    async fn checkpoint(&self) -> StoreResult<Option<Date>> {
        Ok(*self.checkpoint.read())
    }

    async fn advance_checkpoint(&self, date: Date) -> StoreResult<()> {
        let mut guard = self.checkpoint.write();
        if guard.map_or(true, |current| date > current) {
            *guard = Some(date);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(day: u32) -> SurfaceRow {
        SurfaceRow {
            reference_date: Date::from_ymd(2024, 6, day).unwrap(),
            values: vec![Some(0.1), None],
        }
    }

    #[tokio::test]
    async fn test_append_and_read_back() {
        let store = MemoryStore::new();
        assert_eq!(store.last_date().await.unwrap(), None);

        store.append_rows(&[row(10), row(11)]).await.unwrap();
        assert_eq!(
            store.last_date().await.unwrap(),
            Some(Date::from_ymd(2024, 6, 11).unwrap())
        );
        assert_eq!(store.load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_checkpoint_is_independent_of_rows() {
        let store = MemoryStore::new();
        assert_eq!(store.checkpoint().await.unwrap(), None);

        // A processed date is recorded even when no row was persisted
        let wednesday = Date::from_ymd(2024, 6, 12).unwrap();
        store.advance_checkpoint(wednesday).await.unwrap();
        assert_eq!(store.checkpoint().await.unwrap(), Some(wednesday));
        assert_eq!(store.last_date().await.unwrap(), None);

        // Moving backwards is ignored
        store.advance_checkpoint(wednesday - 2).await.unwrap();
        assert_eq!(store.checkpoint().await.unwrap(), Some(wednesday));
    }

    #[tokio::test]
    async fn test_rejects_out_of_order_append() {
        let store = MemoryStore::new();
        store.append_rows(&[row(11)]).await.unwrap();

        assert!(store.append_rows(&[row(10)]).await.is_err());
        assert!(store.append_rows(&[row(11)]).await.is_err());
        // The failed appends left nothing behind
        assert_eq!(store.load().await.unwrap().len(), 1);
    }
}
