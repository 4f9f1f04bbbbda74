//! Per-document scan summaries

use super::models::{Finding, ProtectionCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts of findings for one scanned document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Total findings
    pub total_findings: usize,

    /// Findings by protection category
    pub by_category: BTreeMap<ProtectionCategory, usize>,

    /// Findings by detector label
    pub by_label: BTreeMap<String, usize>,
}

impl ScanSummary {
    /// Summarize a list of findings
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            summary.total_findings += 1;
            *summary.by_category.entry(finding.category).or_insert(0) += 1;
            *summary
                .by_label
                .entry(finding.detector_label.clone())
                .or_insert(0) += 1;
        }
        summary
    }

    /// Whether anything sensitive was found
    pub fn has_findings(&self) -> bool {
        self.total_findings > 0
    }

    /// Number of findings in a category
    pub fn count(&self, category: ProtectionCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    /// Format for console output
    pub fn format_console(&self) -> String {
        if !self.has_findings() {
            return "  No sensitive data found\n".to_string();
        }

        let mut output = format!("  Total findings: {}\n", self.total_findings);
        for (category, count) in &self.by_category {
            output.push_str(&format!(
                "    {:<22} {:>5}  ({})\n",
                category.as_str(),
                count,
                category.description()
            ));
        }
        output
    }
}
