//! PostgreSQL adapter implementing the findings store trait

use crate::adapters::database::traits::FindingStore;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::{ScanResultInsert, ScanResultRow};
use crate::domain::{DocscanError, DocumentName, NewRecord, Record, Result, StorageError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_postgres::Row;

const SELECT_COLUMNS: &str =
    "SELECT file_name, result_type, result_value, classification, created_at FROM scan_results";

/// PostgreSQL implementation of [`FindingStore`]
pub struct PostgreSQLAdapter {
    client: Arc<PostgreSQLClient>,
}

impl PostgreSQLAdapter {
    /// Create a new PostgreSQL adapter
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgreSQLClient> {
        &self.client
    }

    fn rows_to_records(rows: Vec<Row>) -> Result<Vec<Record>> {
        rows.iter()
            .map(|row| ScanResultRow::from_row(row)?.to_domain())
            .collect()
    }
}

#[async_trait]
impl FindingStore for PostgreSQLAdapter {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.client.ensure_schema().await
    }

    async fn insert_records(&self, records: &[NewRecord]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let rows: Vec<ScanResultInsert> = records.iter().map(ScanResultInsert::from_domain).collect();

        match self.client.insert_batch(&rows).await {
            Ok(inserted) => {
                tracing::debug!(count = inserted, "Inserted scan results into PostgreSQL");
                Ok(inserted as usize)
            }
            Err(e) => {
                tracing::error!(
                    count = rows.len(),
                    error = %e,
                    "Failed to insert scan results into PostgreSQL"
                );
                Err(e)
            }
        }
    }

    async fn results_by_document(&self, document: &DocumentName) -> Result<Vec<Record>> {
        tracing::debug!(document = %document, "Querying scan results from PostgreSQL");

        let query = format!("{SELECT_COLUMNS} WHERE file_name = $1 ORDER BY created_at DESC, id ASC");
        let rows = self.client.query(&query, &[&document.as_str()]).await?;

        Self::rows_to_records(rows)
    }

    async fn all_results(&self) -> Result<Vec<Record>> {
        tracing::debug!("Querying all scan results from PostgreSQL");

        let query = format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id ASC");
        let rows = self.client.query(&query, &[]).await?;

        Self::rows_to_records(rows)
    }

    async fn delete_document(&self, document: &DocumentName) -> Result<u64> {
        let deleted = self
            .client
            .execute(
                "DELETE FROM scan_results WHERE file_name = $1",
                &[&document.as_str()],
            )
            .await
            .map_err(|e| match e {
                DocscanError::Database(message) => StorageError::DeleteFailed(message).into(),
                other => other,
            })?;

        tracing::info!(document = %document, deleted, "Deleted scan results from PostgreSQL");
        Ok(deleted)
    }

    fn store_name(&self) -> &str {
        "postgresql"
    }
}
