//! Audit logger for scan operations
//!
//! Every processed document produces one audit entry. Matched values are
//! written only as SHA-256 digests.

use super::models::Finding;
use crate::domain::{DocscanError, DocumentName, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    document_name: String,
    findings_count: usize,
    processing_time_ms: u64,
    persisted: bool,
    findings: Vec<AuditFinding>,
}

/// Audit finding entry (with hashed value)
#[derive(Debug, Serialize)]
struct AuditFinding {
    detector_label: String,
    category: String,
    /// SHA-256 hash of the matched value (never log plaintext)
    value_hash: String,
}

/// Audit logger for scan operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    // Serializes appends from concurrently processed documents
    write_lock: Mutex<()>,
}

impl AuditLogger {
    /// Create a new audit logger, creating the parent directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DocscanError::Io(format!(
                        "Failed to create audit log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the audit log file
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Record the outcome of scanning one document
    pub fn log_scan(
        &self,
        document: &DocumentName,
        findings: &[Finding],
        processing_time_ms: u64,
        persisted: bool,
    ) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            document_name: document.to_string(),
            findings_count: findings.len(),
            processing_time_ms,
            persisted,
            findings: findings.iter().map(Self::audit_finding).collect(),
        };

        self.write_entry(&entry)
    }

    fn audit_finding(finding: &Finding) -> AuditFinding {
        AuditFinding {
            detector_label: finding.detector_label.clone(),
            category: finding.category.to_string(),
            value_hash: hash_value(&finding.matched_value),
        }
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let line = if self.json_format {
            serde_json::to_string(entry)?
        } else {
            format!(
                "[{}] Document: {} | Findings: {} | Persisted: {} | Time: {}ms",
                entry.timestamp,
                entry.document_name,
                entry.findings_count,
                entry.persisted,
                entry.processing_time_ms
            )
        };

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| DocscanError::Other("Audit log lock poisoned".to_string()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                DocscanError::Io(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        writeln!(file, "{line}")?;
        Ok(())
    }
}

/// Hash a matched value using SHA-256
pub fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::models::ProtectionCategory;
    use tempfile::tempdir;

    #[test]
    fn test_hash_value() {
        let hash1 = hash_value("jane@example.com");
        let hash2 = hash_value("jane@example.com");
        let hash3 = hash_value("john@example.com");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_audit_logger_creates_directory() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested").join("audit.log");

        let logger = AuditLogger::new(log_path.clone(), true).unwrap();
        assert!(log_path.parent().unwrap().exists());
        assert_eq!(logger.log_path(), log_path.as_path());
    }

    #[test]
    fn test_log_scan_never_writes_plaintext() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true).unwrap();

        let document = DocumentName::new("intake.txt").unwrap();
        let findings = vec![Finding::new(
            "SSN",
            "123-45-6789",
            ProtectionCategory::Pii,
        )];

        logger.log_scan(&document, &findings, 12, true).unwrap();
        logger.log_scan(&document, &[], 3, false).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["document_name"], "intake.txt");
        assert_eq!(first["findings_count"], 1);
        assert_eq!(first["findings"][0]["category"], "PII");
        assert_eq!(first["findings"][0]["value_hash"], hash_value("123-45-6789"));
        assert!(!content.contains("123-45-6789"));
    }

    #[test]
    fn test_plain_text_format() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), false).unwrap();

        let document = DocumentName::new("notes.md").unwrap();
        logger.log_scan(&document, &[], 7, true).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Document: notes.md | Findings: 0"));
    }
}
