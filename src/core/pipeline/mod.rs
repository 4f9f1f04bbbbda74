//! Document pipeline
//!
//! Ties extraction, scanning, persistence, and auditing together:
//!
//! 1. **Sanitize** the document name (path components are dropped)
//! 2. **Extract** text; a document without text fails here and is never scanned
//! 3. **Scan** the text with the [`ScanEngine`]
//! 4. **Persist** findings unless running dry
//! 5. **Audit** the outcome with hashed values
//!
//! # Example
//!
//! ```rust,no_run
//! use docscan::adapters::memory::MemoryStore;
//! use docscan::core::pipeline::DocumentPipeline;
//! use docscan::detection::ScanEngine;
//! use docscan::extraction::PlainTextExtractor;
//! use std::sync::Arc;
//!
//! # async fn example() -> docscan::domain::Result<()> {
//! let pipeline = DocumentPipeline::new(
//!     ScanEngine::builtin()?,
//!     Arc::new(PlainTextExtractor::default()),
//!     Arc::new(MemoryStore::new()),
//! );
//!
//! let report = pipeline
//!     .process_document("intake.txt", b"SSN: 123-45-6789")
//!     .await?;
//! assert_eq!(report.findings.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod summary;

use crate::adapters::database::traits::FindingStore;
use crate::config::DocscanConfig;
use crate::detection::audit::AuditLogger;
use crate::detection::{Finding, ScanEngine, ScanSummary};
use crate::domain::{DocscanError, DocumentName, ExtractionError, NewRecord, Record, Result};
use crate::extraction::{CompositeExtractor, TextExtractor};
use crate::{log_error_with_context, log_scan_complete, log_scan_start};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;

pub use summary::{BatchSummary, DocumentFailure, DocumentReport, FailureKind};

/// A document submitted for scanning
#[derive(Debug, Clone)]
pub struct DocumentInput {
    /// Name as supplied by the caller; sanitized before use
    pub name: String,
    pub bytes: Vec<u8>,
}

impl DocumentInput {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Extract, scan, persist, and audit documents
pub struct DocumentPipeline {
    engine: ScanEngine,
    extractor: Arc<dyn TextExtractor>,
    store: Arc<dyn FindingStore + Send + Sync>,
    audit: Option<Arc<AuditLogger>>,
    dry_run: bool,
    max_input_bytes: usize,
    max_concurrent_documents: usize,
    shutdown: Option<watch::Receiver<bool>>,
}

impl DocumentPipeline {
    /// Create a pipeline with default limits, no audit log, and persistence on
    pub fn new(
        engine: ScanEngine,
        extractor: Arc<dyn TextExtractor>,
        store: Arc<dyn FindingStore + Send + Sync>,
    ) -> Self {
        let defaults = crate::config::ScanConfig::default();
        Self {
            engine,
            extractor,
            store,
            audit: None,
            dry_run: false,
            max_input_bytes: defaults.max_input_bytes,
            max_concurrent_documents: defaults.max_concurrent_documents,
            shutdown: None,
        }
    }

    /// Build a pipeline from configuration around an existing store
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in detectors fail to compile or the
    /// audit log directory cannot be created.
    pub fn from_config(
        config: &DocscanConfig,
        store: Arc<dyn FindingStore + Send + Sync>,
    ) -> Result<Self> {
        let engine = ScanEngine::builtin()?;
        let extractor = Arc::new(CompositeExtractor::from_config(&config.extraction));

        let mut pipeline = Self::new(engine, extractor, store)
            .with_dry_run(config.application.dry_run)
            .with_limits(
                config.scan.max_input_bytes,
                config.scan.max_concurrent_documents,
            );

        if config.audit.enabled {
            let logger = AuditLogger::new(config.audit.log_path.clone(), config.audit.json_format)?;
            pipeline = pipeline.with_audit_logger(Arc::new(logger));
        }

        Ok(pipeline)
    }

    pub fn with_audit_logger(mut self, audit: Arc<AuditLogger>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Scan without writing to the store
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_limits(mut self, max_input_bytes: usize, max_concurrent_documents: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self.max_concurrent_documents = max_concurrent_documents.max(1);
        self
    }

    /// Stop starting new documents once `true` is sent
    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn store(&self) -> &Arc<dyn FindingStore + Send + Sync> {
        &self.store
    }

    /// Process a single document
    ///
    /// # Errors
    ///
    /// - [`DocscanError::Validation`] if the name is empty after sanitizing
    /// - [`DocscanError::Extraction`] if no text can be extracted or the
    ///   text exceeds the input limit
    /// - [`DocscanError::Storage`] if persisting the findings fails
    pub async fn process_document(&self, name: &str, bytes: &[u8]) -> Result<DocumentReport> {
        let start = Instant::now();
        let document = DocumentName::new(name).map_err(DocscanError::Validation)?;

        log_scan_start!(&document, bytes.len());

        let extractor = self.extractor.clone();
        let extract_document = document.clone();
        let owned_bytes = bytes.to_vec();
        let text =
            tokio::task::spawn_blocking(move || extractor.extract(&extract_document, &owned_bytes))
                .await
                .map_err(|e| DocscanError::Other(format!("Extraction task failed: {e}")))??;
        if text.len() > self.max_input_bytes {
            return Err(ExtractionError::TooLarge {
                size: text.len(),
                limit: self.max_input_bytes,
            }
            .into());
        }

        let engine = self.engine.clone();
        let findings = tokio::task::spawn_blocking(move || engine.scan(&text))
            .await
            .map_err(|e| DocscanError::Other(format!("Scan task failed: {e}")))?;

        let persisted = if self.dry_run {
            tracing::info!(
                document = %document,
                count = findings.len(),
                "DRY RUN: Would store {} scan results",
                findings.len()
            );
            false
        } else {
            let records: Vec<NewRecord> = findings
                .iter()
                .map(|finding| NewRecord::from_finding(&document, finding))
                .collect();
            self.store.insert_records(&records).await?;
            true
        };

        let duration = start.elapsed();

        if let Some(ref audit) = self.audit {
            write_audit(audit.clone(), &document, &findings, duration, persisted).await;
        }

        log_scan_complete!(&document, findings.len(), duration);

        let summary = ScanSummary::from_findings(&findings);
        Ok(DocumentReport {
            document_name: document,
            findings,
            summary,
            persisted,
            duration,
        })
    }

    /// Process several documents with bounded concurrency
    ///
    /// Individual failures are collected in the summary and don't stop the
    /// remaining documents. Results keep the input order.
    pub async fn process_many(&self, inputs: Vec<DocumentInput>) -> BatchSummary {
        let start = Instant::now();
        let total = inputs.len();

        tracing::info!(
            documents = total,
            concurrency = self.max_concurrent_documents,
            dry_run = self.dry_run,
            "Starting batch scan"
        );

        let outcomes: Vec<(String, Option<Result<DocumentReport>>)> = stream::iter(inputs)
            .map(|input| async move {
                if self.shutdown_requested() {
                    return (input.name, None);
                }
                let outcome = self.process_document(&input.name, &input.bytes).await;
                (input.name, Some(outcome))
            })
            .buffered(self.max_concurrent_documents)
            .collect()
            .await;

        let mut summary = BatchSummary::new();
        for (name, outcome) in outcomes {
            match outcome {
                Some(Ok(report)) => summary.reports.push(report),
                Some(Err(e)) => {
                    log_error_with_context!(&e, "Document processing failed");
                    summary.failures.push(DocumentFailure::new(name, &e));
                }
                None => summary.skipped.push(name),
            }
        }

        if !summary.skipped.is_empty() {
            tracing::warn!(
                skipped = summary.skipped.len(),
                "Shutdown requested, remaining documents were not scanned"
            );
        }

        let summary = summary.with_duration(start.elapsed());
        summary.log_summary();
        summary
    }

    /// Stored results for one document, or for all documents
    pub async fn results(&self, document: Option<&str>) -> Result<Vec<Record>> {
        match document {
            Some(name) => {
                let document = DocumentName::new(name).map_err(DocscanError::Validation)?;
                self.store.results_by_document(&document).await
            }
            None => self.store.all_results().await,
        }
    }

    /// Delete stored results for a document
    ///
    /// # Returns
    ///
    /// The number of records removed; zero if the document had none.
    pub async fn delete_results(&self, document: &str) -> Result<u64> {
        let document = DocumentName::new(document).map_err(DocscanError::Validation)?;
        let deleted = self.store.delete_document(&document).await?;

        tracing::info!(document = %document, deleted, "Deleted scan results");
        Ok(deleted)
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown
            .as_ref()
            .map(|rx| *rx.borrow())
            .unwrap_or(false)
    }
}

/// Append an audit entry on the blocking pool; failures are logged only
async fn write_audit(
    audit: Arc<AuditLogger>,
    document: &DocumentName,
    findings: &[Finding],
    duration: Duration,
    persisted: bool,
) {
    let document = document.clone();
    let findings = findings.to_vec();
    let elapsed_ms = duration.as_millis() as u64;

    let outcome = tokio::task::spawn_blocking(move || {
        audit.log_scan(&document, &findings, elapsed_ms, persisted)
    })
    .await;

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            log_error_with_context!(&e, "Failed to write audit entry");
        }
        Err(e) => {
            tracing::error!(error = %e, "Audit task failed");
        }
    }
}
