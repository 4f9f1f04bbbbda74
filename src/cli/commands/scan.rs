//! Scan command implementation
//!
//! Reads documents from disk, scans them, and stores the findings.

use super::{
    load_validated_config, open_store, EXIT_CONNECTION, EXIT_EXTRACTION, EXIT_FATAL,
    EXIT_INTERRUPTED, EXIT_OK,
};
use crate::core::pipeline::{
    BatchSummary, DocumentFailure, DocumentInput, DocumentPipeline, FailureKind,
};
use crate::domain::DocscanError;
use clap::Args;
use std::path::{Path, PathBuf};
use tokio::sync::watch;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Documents to scan
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Scan without storing results
    #[arg(long)]
    pub dry_run: bool,

    /// Print the full report, including matched values, as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!(files = self.files.len(), "Starting scan command");

        let mut config = match load_validated_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        let store = match open_store(&config).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let pipeline = match DocumentPipeline::from_config(&config, store) {
            Ok(p) => p.with_shutdown(shutdown_signal),
            Err(e) => {
                tracing::error!(error = %e, "Failed to build scan pipeline");
                eprintln!("❌ Failed to initialize scanner: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        if pipeline.is_dry_run() && !self.json {
            println!("🔍 DRY RUN MODE - No results will be written to the store");
            println!();
        }

        let (inputs, read_failures) = read_documents(&self.files).await;

        let mut summary = pipeline.process_many(inputs).await;
        summary.failures.extend(read_failures);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print!("{}", summary.format_console());
        }

        Ok(exit_code(&summary))
    }
}

/// Read every file, keeping unreadable ones as failures
async fn read_documents(files: &[PathBuf]) -> (Vec<DocumentInput>, Vec<DocumentFailure>) {
    let mut inputs = Vec::with_capacity(files.len());
    let mut failures = Vec::new();

    for path in files {
        let name = display_name(path);
        match tokio::fs::read(path).await {
            Ok(bytes) => inputs.push(DocumentInput::new(name, bytes)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read document");
                failures.push(DocumentFailure::new(name, &DocscanError::from(e)));
            }
        }
    }

    (inputs, failures)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn exit_code(summary: &BatchSummary) -> i32 {
    if !summary.skipped.is_empty() {
        tracing::info!("Scan interrupted by user signal");
        EXIT_INTERRUPTED
    } else if summary.has_failure(FailureKind::Storage) {
        EXIT_CONNECTION
    } else if summary.has_failure(FailureKind::Extraction)
        || summary.has_failure(FailureKind::InvalidName)
    {
        EXIT_EXTRACTION
    } else if !summary.failures.is_empty() {
        EXIT_FATAL
    } else {
        EXIT_OK
    }
}
