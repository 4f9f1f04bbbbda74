//! Results command implementation
//!
//! Lists stored scan results, newest first.

use super::{load_validated_config, open_store, EXIT_CONFIG, EXIT_CONNECTION, EXIT_OK};
use crate::adapters::database::FindingStore;
use crate::domain::{DocscanError, DocumentName, Record};
use clap::Args;

/// Arguments for the results command
#[derive(Args, Debug)]
pub struct ResultsArgs {
    /// Only show results for this document
    #[arg(short, long)]
    pub document: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ResultsArgs {
    /// Execute the results command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_validated_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let store = match open_store(&config).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let records = match fetch(store.as_ref(), self.document.as_deref()).await {
            Ok(r) => r,
            Err(DocscanError::Validation(e)) => {
                eprintln!("❌ Invalid document name: {e}");
                return Ok(EXIT_CONFIG);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read scan results");
                eprintln!("❌ Failed to read scan results: {e}");
                return Ok(EXIT_CONNECTION);
            }
        };

        tracing::info!(
            document = ?self.document,
            count = records.len(),
            "Retrieved scan results"
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            print!("{}", format_records(&records));
        }

        Ok(EXIT_OK)
    }
}

async fn fetch(
    store: &(dyn FindingStore + Send + Sync),
    document: Option<&str>,
) -> crate::domain::Result<Vec<Record>> {
    match document {
        Some(name) => {
            let document = DocumentName::new(name).map_err(DocscanError::Validation)?;
            store.results_by_document(&document).await
        }
        None => store.all_results().await,
    }
}

fn format_records(records: &[Record]) -> String {
    if records.is_empty() {
        return "No scan results found\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<25} {:<28} {:<22} {}\n",
        "CREATED", "DOCUMENT", "TYPE", "CATEGORY"
    ));
    for record in records {
        output.push_str(&format!(
            "{:<25} {:<28} {:<22} {}\n",
            record.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
            record.document_name.as_str(),
            record.detector_label,
            record.category
        ));
    }
    output.push_str(&format!("\n{} result(s)\n", records.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::detection::{Finding, ProtectionCategory};
    use crate::domain::NewRecord;

    #[tokio::test]
    async fn test_fetch_by_document() {
        let store = MemoryStore::new();
        let a = DocumentName::new("a.txt").unwrap();
        let b = DocumentName::new("b.txt").unwrap();
        store
            .insert_records(&[
                NewRecord::from_finding(
                    &a,
                    &Finding::new("SSN", "123-45-6789", ProtectionCategory::Pii),
                ),
                NewRecord::from_finding(
                    &b,
                    &Finding::new("Diagnosis", "Stroke", ProtectionCategory::Phi),
                ),
            ])
            .await
            .unwrap();

        let records = fetch(&store, Some("a.txt")).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].detector_label, "SSN");

        assert_eq!(fetch(&store, None).await.unwrap().len(), 2);
        assert!(matches!(
            fetch(&store, Some("   ")).await,
            Err(DocscanError::Validation(_))
        ));
    }

    #[test]
    fn test_format_records_hides_values() {
        let document = DocumentName::new("a.txt").unwrap();
        let record = NewRecord::from_finding(
            &document,
            &Finding::new("SSN", "123-45-6789", ProtectionCategory::Pii),
        )
        .into_record(chrono::Utc::now());

        let output = format_records(&[record]);
        assert!(output.contains("a.txt"));
        assert!(output.contains("SSN"));
        assert!(!output.contains("123-45-6789"));
        assert!(output.contains("1 result(s)"));

        assert_eq!(format_records(&[]), "No scan results found\n");
    }
}
