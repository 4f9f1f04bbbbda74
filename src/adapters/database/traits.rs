//! Storage abstraction traits
//!
//! This module defines the trait that findings stores must implement to work
//! with Docscan.

use crate::domain::{DocumentName, NewRecord, Record, Result};
use async_trait::async_trait;

/// Persistent store for scan results
///
/// Retrieval returns records newest first. Records inserted by the same call
/// keep their insertion order relative to each other.
#[async_trait]
pub trait FindingStore: Send + Sync {
    /// Test the store connection
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable.
    async fn test_connection(&self) -> Result<()>;

    /// Create tables and indexes if they don't exist
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    async fn ensure_schema(&self) -> Result<()>;

    /// Insert records for one or more documents
    ///
    /// Either every record is stored or none is.
    ///
    /// # Returns
    ///
    /// The number of records stored.
    async fn insert_records(&self, records: &[NewRecord]) -> Result<usize>;

    /// All records for a single document
    async fn results_by_document(&self, document: &DocumentName) -> Result<Vec<Record>>;

    /// All stored records
    async fn all_results(&self) -> Result<Vec<Record>>;

    /// Delete every record for a document
    ///
    /// Deleting a document with no records is not an error.
    ///
    /// # Returns
    ///
    /// The number of records removed.
    async fn delete_document(&self, document: &DocumentName) -> Result<u64>;

    /// Store name for logs and status output
    fn store_name(&self) -> &str;
}
