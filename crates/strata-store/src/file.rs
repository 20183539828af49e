//! JSON-lines surface store.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use strata_core::types::Date;
use strata_curves::surface::SurfaceRow;

use crate::{check_append_order, StoreError, StoreResult, SurfaceStore};

/// A file-backed store: one JSON document per row, one row per line.
///
/// Appends go through a single locked writer and are flushed to the OS
/// before returning, so a row that `append_rows` acknowledged is on disk
/// (or at least queued there) before the driver moves its checkpoint. A
/// missing file reads as an empty store.
///
/// The checkpoint lives in a sidecar file next to the rows
/// (`surface.jsonl` → `surface.checkpoint`) holding a single ISO date.
pub struct JsonlStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlStore {
    /// Creates a store over the given file path. The file itself is
    /// created lazily on first append.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn checkpoint_path(&self) -> PathBuf {
        self.path.with_extension("checkpoint")
    }

    fn read_checkpoint(&self) -> StoreResult<Option<Date>> {
        let path = self.checkpoint_path();
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&path)?;
        let date = Date::parse(text.trim())
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display())))?;
        Ok(Some(date))
    }

    fn read_rows(&self) -> StoreResult<Vec<SurfaceRow>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut rows = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            rows.push(serde_json::from_str(&line)?);
        }

        check_append_order(None, &rows)
            .map_err(|_| StoreError::Corrupt(format!("{} is not date-ordered", self.path.display())))?;
        Ok(rows)
    }
}

#[async_trait]
impl SurfaceStore for JsonlStore {
    async fn last_date(&self) -> StoreResult<Option<Date>> {
        Ok(self.read_rows()?.last().map(|r| r.reference_date))
    }

    async fn append_rows(&self, rows: &[SurfaceRow]) -> StoreResult<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let _guard = self.write_lock.lock();
        let last = self.read_rows()?.last().map(|r| r.reference_date);
        check_append_order(last, rows)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        for row in rows {
            let line = serde_json::to_string(row)?;
            writeln!(file, "{line}")?;
        }
        file.flush()?;

        debug!(
            path = %self.path.display(),
            rows = rows.len(),
            "appended surface rows"
        );
        Ok(())
    }

    async fn load(&self) -> StoreResult<Vec<SurfaceRow>> {
        self.read_rows()
    }

    async fn checkpoint(&self) -> StoreResult<Option<Date>> {
        self.read_checkpoint()
    }

    async fn advance_checkpoint(&self, date: Date) -> StoreResult<()> {
        let _guard = self.write_lock.lock();
        if let Some(current) = self.read_checkpoint()? {
            if date <= current {
                return Ok(());
            }
        }
        std::fs::write(self.checkpoint_path(), format!("{date}\n"))?;

        debug!(
            path = %self.path.display(),
            %date,
            "advanced checkpoint"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(day: u32) -> SurfaceRow {
        SurfaceRow {
            reference_date: Date::from_ymd(2024, 6, day).unwrap(),
            values: vec![Some(0.1), None, Some(0.12)],
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlStore::new(dir.path().join("surface.jsonl"));
        assert_eq!(store.last_date().await.unwrap(), None);
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.jsonl");

        let store = JsonlStore::new(&path);
        store.append_rows(&[row(10), row(11)]).await.unwrap();

        // A fresh handle over the same file sees the committed rows
        let reopened = JsonlStore::new(&path);
        let rows = reopened.load().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows, vec![row(10), row(11)]);
        assert_eq!(
            reopened.last_date().await.unwrap(),
            Some(Date::from_ymd(2024, 6, 11).unwrap())
        );
    }

    #[tokio::test]
    async fn test_rejects_out_of_order_append() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlStore::new(dir.path().join("surface.jsonl"));
        store.append_rows(&[row(11)]).await.unwrap();

        assert!(store.append_rows(&[row(10)]).await.is_err());
        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_checkpoint_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.jsonl");

        let store = JsonlStore::new(&path);
        let date = Date::from_ymd(2024, 6, 19).unwrap();
        store.advance_checkpoint(date).await.unwrap();

        let reopened = JsonlStore::new(&path);
        assert_eq!(reopened.checkpoint().await.unwrap(), Some(date));
        // No rows were ever written, only the checkpoint record
        assert_eq!(reopened.last_date().await.unwrap(), None);

        // Moving backwards is ignored
        reopened.advance_checkpoint(date - 2).await.unwrap();
        assert_eq!(reopened.checkpoint().await.unwrap(), Some(date));
    }

    #[tokio::test]
    async fn test_detects_corrupt_checkpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.jsonl");
        std::fs::write(path.with_extension("checkpoint"), "yesterday\n").unwrap();

        let store = JsonlStore::new(&path);
        assert!(matches!(
            store.checkpoint().await,
            Err(StoreError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn test_detects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.jsonl");
        std::fs::write(&path, "not json\n").unwrap();

        let store = JsonlStore::new(&path);
        assert!(matches!(
            store.load().await,
            Err(StoreError::Serialization(_))
        ));
    }
}
