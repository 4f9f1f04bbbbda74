// Docscan - Sensitive Data Scanner
// Copyright (c) 2025 Docscan Contributors
// Licensed under the MIT License

//! # Docscan - Sensitive Data Scanner
//!
//! Docscan scans the text of documents for sensitive-data fragments, such as
//! national identifiers, card numbers, medical terms, and contact details. It
//! classifies each match as PII, PHI, PCI, or a related category, and stores
//! the findings for later retrieval.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Document pipeline (extract, scan, persist, audit)
//! - [`detection`] - Detector rules, classifier, scan engine, audit log
//! - [`extraction`] - Text extraction from document bytes
//! - [`adapters`] - Findings stores (PostgreSQL, in-memory)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use docscan::detection::{ProtectionCategory, ScanEngine};
//!
//! let engine = ScanEngine::builtin().unwrap();
//! let findings = engine.scan("Card 4111-1111-1111-1111 on file");
//!
//! assert!(findings
//!     .iter()
//!     .any(|f| f.detector_label == "Credit Card" && f.category == ProtectionCategory::Pci));
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`], backed by
//! [`domain::DocscanError`]:
//!
//! ```rust,no_run
//! use docscan::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = docscan::config::load_config("docscan.toml")?;
//!     println!("Store: {:?}", config.database_target);
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Docscan uses structured logging with the `tracing` crate. Matched values
//! never appear in log events:
//!
//! ```rust,no_run
//! tracing::info!(document = "intake.txt", findings = 3, "Document scan completed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod detection;
pub mod domain;
pub mod extraction;
pub mod logging;
