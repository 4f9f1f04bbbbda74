//! Pipeline results and batch summaries

use crate::detection::{Finding, ProtectionCategory, ScanSummary};
use crate::domain::{DocscanError, DocumentName};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Outcome of processing one document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub document_name: DocumentName,

    /// Findings in scan order
    pub findings: Vec<Finding>,

    pub summary: ScanSummary,

    /// Whether the findings were written to the store
    pub persisted: bool,

    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Broad class of a per-document failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Document name was empty or otherwise unusable
    InvalidName,
    /// No scannable text could be produced
    Extraction,
    /// The findings store rejected the write
    Storage,
    /// Anything else
    Other,
}

impl FailureKind {
    pub fn from_error(error: &DocscanError) -> Self {
        match error {
            DocscanError::Validation(_) => Self::InvalidName,
            DocscanError::Extraction(_) => Self::Extraction,
            DocscanError::Storage(_) | DocscanError::Database(_) => Self::Storage,
            _ => Self::Other,
        }
    }
}

/// A document that could not be processed
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFailure {
    /// Name as supplied by the caller
    pub document: String,
    pub kind: FailureKind,
    pub message: String,
}

impl DocumentFailure {
    pub fn new(document: impl Into<String>, error: &DocscanError) -> Self {
        Self {
            document: document.into(),
            kind: FailureKind::from_error(error),
            message: error.to_string(),
        }
    }
}

/// Summary of a multi-document run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    /// Successful documents, in input order
    pub reports: Vec<DocumentReport>,

    /// Failed documents, in input order
    pub failures: Vec<DocumentFailure>,

    /// Documents not started because shutdown was requested
    pub skipped: Vec<String>,

    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Total documents submitted
    pub fn total_documents(&self) -> usize {
        self.reports.len() + self.failures.len() + self.skipped.len()
    }

    /// Total findings across successful documents
    pub fn total_findings(&self) -> usize {
        self.reports.iter().map(|r| r.findings.len()).sum()
    }

    /// Findings per category across successful documents
    pub fn findings_by_category(&self) -> BTreeMap<ProtectionCategory, usize> {
        let mut totals = BTreeMap::new();
        for report in &self.reports {
            for (category, count) in &report.summary.by_category {
                *totals.entry(*category).or_insert(0) += count;
            }
        }
        totals
    }

    /// Check if every document was processed
    pub fn is_successful(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty()
    }

    /// Whether any failure has the given kind
    pub fn has_failure(&self, kind: FailureKind) -> bool {
        self.failures.iter().any(|f| f.kind == kind)
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_documents = self.total_documents(),
            successful = self.reports.len(),
            failed = self.failures.len(),
            skipped = self.skipped.len(),
            total_findings = self.total_findings(),
            duration_ms = self.duration.as_millis() as u64,
            "Scan completed"
        );

        for failure in &self.failures {
            tracing::warn!(
                document = %failure.document,
                kind = ?failure.kind,
                message = %failure.message,
                "Document failed"
            );
        }
    }

    /// Format for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                        DOCSCAN REPORT                         \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        for report in &self.reports {
            output.push_str(&format!(
                "📄 {}{}\n",
                report.document_name,
                if report.persisted { "" } else { " (not persisted)" }
            ));
            output.push_str(&report.summary.format_console());
            output.push('\n');
        }

        for failure in &self.failures {
            output.push_str(&format!("❌ {}: {}\n", failure.document, failure.message));
        }
        if !self.failures.is_empty() {
            output.push('\n');
        }

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Documents Processed: {}\n", self.reports.len()));
        output.push_str(&format!("  Documents Failed:    {}\n", self.failures.len()));
        if !self.skipped.is_empty() {
            output.push_str(&format!("  Documents Skipped:   {}\n", self.skipped.len()));
        }
        output.push_str(&format!("  Total Findings:      {}\n", self.total_findings()));

        let by_category = self.findings_by_category();
        if !by_category.is_empty() {
            output.push('\n');
            output.push_str("🔍 FINDINGS BY CATEGORY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (category, count) in by_category {
                output.push_str(&format!("  {:30} {:>5}\n", category.description(), count));
            }
        }

        output.push('\n');
        output.push_str(&format!("  Duration: {} ms\n", self.duration.as_millis()));
        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExtractionError, StorageError};

    fn report(name: &str, findings: Vec<Finding>) -> DocumentReport {
        let summary = ScanSummary::from_findings(&findings);
        DocumentReport {
            document_name: DocumentName::new(name).unwrap(),
            findings,
            summary,
            persisted: true,
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_failure_kind_from_error() {
        assert_eq!(
            FailureKind::from_error(&DocscanError::Validation("bad".to_string())),
            FailureKind::InvalidName
        );
        assert_eq!(
            FailureKind::from_error(&ExtractionError::Empty("a.txt".to_string()).into()),
            FailureKind::Extraction
        );
        assert_eq!(
            FailureKind::from_error(&StorageError::InsertFailed("down".to_string()).into()),
            FailureKind::Storage
        );
        assert_eq!(
            FailureKind::from_error(&DocscanError::Other("?".to_string())),
            FailureKind::Other
        );
    }

    #[test]
    fn test_batch_totals() {
        let mut summary = BatchSummary::new();
        summary.reports.push(report(
            "a.txt",
            vec![
                Finding::new("SSN", "123-45-6789", ProtectionCategory::Pii),
                Finding::new("Diagnosis", "Stroke", ProtectionCategory::Phi),
            ],
        ));
        summary.reports.push(report(
            "b.txt",
            vec![Finding::new("PAN", "ABCDE1234F", ProtectionCategory::Pii)],
        ));
        summary.failures.push(DocumentFailure::new(
            "c.pdf",
            &ExtractionError::UnsupportedFormat("pdf".to_string()).into(),
        ));

        assert_eq!(summary.total_documents(), 3);
        assert_eq!(summary.total_findings(), 3);
        assert_eq!(summary.findings_by_category().get(&ProtectionCategory::Pii), Some(&2));
        assert!(!summary.is_successful());
        assert!(summary.has_failure(FailureKind::Extraction));
        assert!(!summary.has_failure(FailureKind::Storage));

        let console = summary.format_console();
        assert!(console.contains("DOCSCAN REPORT"));
        assert!(console.contains("a.txt"));
        assert!(console.contains("❌ c.pdf"));
        assert!(console.contains("Total Findings:      3"));
        // Console output carries counts only
        assert!(!console.contains("123-45-6789"));
    }

    #[test]
    fn test_report_serializes_duration_in_millis() {
        let json = serde_json::to_value(report("a.txt", vec![])).unwrap();
        assert_eq!(json["duration_ms"], 5);
        assert_eq!(json["document_name"], "a.txt");
    }
}
