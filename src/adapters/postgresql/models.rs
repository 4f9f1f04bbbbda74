//! PostgreSQL row models
//!
//! This module defines the row structure of the `scan_results` table and its
//! mapping to domain records.

use crate::detection::ProtectionCategory;
use crate::domain::{DocscanError, DocumentName, NewRecord, Record, Result, StorageError};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::error::Error;
use tokio_postgres::types::{FromSql, Type};
use tokio_postgres::Row;

/// Row of the `scan_results` table
///
/// Column names are kept from the existing deployed schema: `result_type`
/// holds the detector label and `result_value` the matched text.
#[derive(Debug, Clone)]
pub struct ScanResultRow {
    pub file_name: String,
    pub result_type: String,
    pub result_value: String,
    pub classification: String,
    pub created_at: DateTime<Utc>,
}

impl ScanResultRow {
    /// Read a row returned by a `SELECT file_name, result_type, ...` query
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            file_name: get(row, "file_name")?,
            result_type: get(row, "result_type")?,
            result_value: get(row, "result_value")?,
            classification: get(row, "classification")?,
            created_at: get::<StoredTimestamp>(row, "created_at")?.0,
        })
    }

    /// Convert to a domain record
    ///
    /// Accepts the spaced category spellings written by earlier releases.
    pub fn to_domain(&self) -> Result<Record> {
        let document_name = DocumentName::new(self.file_name.as_str())
            .map_err(StorageError::InvalidRecord)?;
        let category = self
            .classification
            .parse::<ProtectionCategory>()
            .map_err(StorageError::InvalidRecord)?;

        Ok(Record {
            document_name,
            detector_label: self.result_type.clone(),
            matched_value: self.result_value.clone(),
            category,
            created_at: self.created_at,
        })
    }
}

/// Column values for an insert, in `scan_results` column order
#[derive(Debug, Clone)]
pub struct ScanResultInsert {
    pub file_name: String,
    pub result_type: String,
    pub result_value: String,
    pub classification: String,
}

impl ScanResultInsert {
    pub fn from_domain(record: &NewRecord) -> Self {
        Self {
            file_name: record.document_name.to_string(),
            result_type: record.detector_label.clone(),
            result_value: record.matched_value.clone(),
            classification: record.category.as_str().to_string(),
        }
    }
}

/// `created_at` as stored by either schema generation
///
/// Tables created by earlier releases declare the column as `TIMESTAMP`
/// without a time zone; those values were written in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StoredTimestamp(DateTime<Utc>);

impl<'a> FromSql<'a> for StoredTimestamp {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> std::result::Result<Self, Box<dyn Error + Sync + Send>> {
        if *ty == Type::TIMESTAMP {
            NaiveDateTime::from_sql(ty, raw).map(|naive| Self(naive.and_utc()))
        } else {
            DateTime::<Utc>::from_sql(ty, raw).map(Self)
        }
    }

    fn accepts(ty: &Type) -> bool {
        <NaiveDateTime as FromSql>::accepts(ty) || <DateTime<Utc> as FromSql>::accepts(ty)
    }
}

fn get<'a, T>(row: &'a Row, column: &str) -> Result<T>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get(column).map_err(|e| {
        DocscanError::Storage(StorageError::InvalidRecord(format!(
            "column '{column}': {e}"
        )))
    })
}
