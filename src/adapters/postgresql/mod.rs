//! PostgreSQL storage for scan results
//!
//! Findings are stored one per row in the `scan_results` table.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
pub use models::{ScanResultInsert, ScanResultRow};
