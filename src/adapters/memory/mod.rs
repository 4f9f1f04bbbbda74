//! In-memory findings store
//!
//! Used for dry runs, tests, and single-shot CLI scans where persistence is
//! not wanted. Contents are lost when the process exits.

use crate::adapters::database::traits::FindingStore;
use crate::domain::{DocumentName, NewRecord, Record, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct StoredRecord {
    batch: u64,
    record: Record,
}

#[derive(Debug, Default)]
struct Inner {
    next_batch: u64,
    records: Vec<StoredRecord>,
}

/// Findings store backed by a `Vec` behind an async lock
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // Newest batch first, insertion order within a batch
    fn collect_newest_first<'a>(records: impl Iterator<Item = &'a StoredRecord>) -> Vec<Record> {
        let mut selected: Vec<&StoredRecord> = records.collect();
        selected.sort_by(|a, b| b.batch.cmp(&a.batch));
        selected.into_iter().map(|s| s.record.clone()).collect()
    }
}

#[async_trait]
impl FindingStore for MemoryStore {
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn insert_records(&self, records: &[NewRecord]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut inner = self.inner.write().await;
        let batch = inner.next_batch;
        inner.next_batch += 1;

        let created_at = Utc::now();
        inner
            .records
            .extend(records.iter().cloned().map(|record| StoredRecord {
                batch,
                record: record.into_record(created_at),
            }));

        tracing::debug!(count = records.len(), batch, "Stored records in memory");
        Ok(records.len())
    }

    async fn results_by_document(&self, document: &DocumentName) -> Result<Vec<Record>> {
        let inner = self.inner.read().await;
        Ok(Self::collect_newest_first(
            inner
                .records
                .iter()
                .filter(|s| &s.record.document_name == document),
        ))
    }

    async fn all_results(&self) -> Result<Vec<Record>> {
        let inner = self.inner.read().await;
        Ok(Self::collect_newest_first(inner.records.iter()))
    }

    async fn delete_document(&self, document: &DocumentName) -> Result<u64> {
        let mut inner = self.inner.write().await;
        let before = inner.records.len();
        inner
            .records
            .retain(|s| &s.record.document_name != document);
        Ok((before - inner.records.len()) as u64)
    }

    fn store_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{Finding, ProtectionCategory};

    fn records(document: &str, values: &[&str]) -> Vec<NewRecord> {
        let document = DocumentName::new(document).unwrap();
        values
            .iter()
            .map(|value| {
                NewRecord::from_finding(
                    &document,
                    &Finding::new("SSN", *value, ProtectionCategory::Pii),
                )
            })
            .collect()
    }

    fn values(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.matched_value.as_str()).collect()
    }

    #[tokio::test]
    async fn test_insert_and_query() {
        let store = MemoryStore::new();
        let inserted = store
            .insert_records(&records("a.txt", &["111-11-1111", "222-22-2222"]))
            .await
            .unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(store.len().await, 2);

        let doc = DocumentName::new("a.txt").unwrap();
        let results = store.results_by_document(&doc).await.unwrap();
        assert_eq!(values(&results), vec!["111-11-1111", "222-22-2222"]);
        assert!(results.iter().all(|r| r.category == ProtectionCategory::Pii));
    }

    #[tokio::test]
    async fn test_newest_batch_first() {
        let store = MemoryStore::new();
        store
            .insert_records(&records("a.txt", &["111-11-1111"]))
            .await
            .unwrap();
        store
            .insert_records(&records("b.txt", &["222-22-2222", "333-33-3333"]))
            .await
            .unwrap();

        let all = store.all_results().await.unwrap();
        assert_eq!(values(&all), vec!["222-22-2222", "333-33-3333", "111-11-1111"]);
    }

    #[tokio::test]
    async fn test_delete_document() {
        let store = MemoryStore::new();
        store
            .insert_records(&records("a.txt", &["111-11-1111", "222-22-2222"]))
            .await
            .unwrap();
        store
            .insert_records(&records("b.txt", &["333-33-3333"]))
            .await
            .unwrap();

        let a = DocumentName::new("a.txt").unwrap();
        assert_eq!(store.delete_document(&a).await.unwrap(), 2);
        assert!(store.results_by_document(&a).await.unwrap().is_empty());
        assert_eq!(store.len().await, 1);

        // Deleting again is a no-op
        assert_eq!(store.delete_document(&a).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_insert() {
        let store = MemoryStore::new();
        assert_eq!(store.insert_records(&[]).await.unwrap(), 0);
        assert!(store.is_empty().await);
    }
}
