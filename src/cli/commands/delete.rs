//! Delete command implementation
//!
//! Removes every stored result for one document.

use super::{load_validated_config, open_store, EXIT_CONFIG, EXIT_CONNECTION, EXIT_OK};
use crate::domain::DocumentName;
use clap::Args;

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Document whose results should be removed
    #[arg(short, long)]
    pub document: String,
}

impl DeleteArgs {
    /// Execute the delete command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let document = match DocumentName::new(self.document.as_str()) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Invalid document name: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let config = match load_validated_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let store = match open_store(&config).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        match store.delete_document(&document).await {
            Ok(deleted) => {
                tracing::info!(document = %document, deleted, "Deleted scan results");
                if deleted == 0 {
                    println!("ℹ️  No scan results found for {document}");
                } else {
                    println!("🗑️  Deleted {deleted} scan result(s) for {document}");
                }
                Ok(EXIT_OK)
            }
            Err(e) => {
                tracing::error!(error = %e, document = %document, "Failed to delete scan results");
                eprintln!("❌ Failed to delete scan results: {e}");
                Ok(EXIT_CONNECTION)
            }
        }
    }
}
