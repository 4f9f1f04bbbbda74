//! Sensitive-data detection and classification
//!
//! The detection core consists of:
//! - **Patterns**: a fixed, ordered registry of named detector rules
//! - **Classifier**: a total mapping from detector label to protection category
//! - **Engine**: the scan pass producing ordered, classified findings
//!
//! Supporting pieces are the per-document [`ScanSummary`] and the hashed
//! [`AuditLogger`](audit::AuditLogger).
//!
//! # Usage
//!
//! ```rust,ignore
//! use docscan::detection::ScanEngine;
//!
//! let engine = ScanEngine::builtin()?;
//! for finding in engine.scan(&text) {
//!     println!("{} -> {}", finding.detector_label, finding.category);
//! }
//! ```

pub mod audit;
pub mod classifier;
pub mod engine;
pub mod models;
pub mod patterns;
pub mod summary;

// Re-export main types
pub use classifier::classify;
pub use engine::ScanEngine;
pub use models::{Finding, ProtectionCategory};
pub use patterns::{DetectorRule, PatternRegistry};
pub use summary::ScanSummary;
