//! Core business logic for Docscan.
//!
//! # Modules
//!
//! - [`pipeline`] - Document processing: extraction, scanning, persistence, audit
//!
//! # Scan Workflow
//!
//! 1. **Validate**: Sanitize the supplied document name
//! 2. **Extract**: Decode the document bytes into text
//! 3. **Scan**: Run every detector rule over the text in registry order
//! 4. **Persist**: Save one record per finding in a single write (skipped in dry-run)
//! 5. **Audit**: Append a hashed audit entry
//! 6. **Report**: Return findings plus per-category counts
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
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = DocumentPipeline::new(
//!     ScanEngine::builtin()?,
//!     Arc::new(PlainTextExtractor::default()),
//!     Arc::new(MemoryStore::new()),
//! );
//!
//! let report = pipeline
//!     .process_document("intake.txt", b"Diagnosis: Stroke")
//!     .await?;
//! println!("Findings: {}", report.findings.len());
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
