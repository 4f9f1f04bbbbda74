//! Scan engine
//!
//! Runs every registered rule over a text and returns a flat, ordered list of
//! classified findings.
//!
//! # Ordering
//!
//! Findings are grouped by rule in registry order, and within a rule they
//! follow the left-to-right position of the match. A fragment that satisfies
//! two rules is reported once for each; overlapping matches from different
//! rules are never merged or suppressed.
//!
//! # Examples
//!
//! ```
//! use docscan::detection::{ProtectionCategory, ScanEngine};
//!
//! # fn example() -> docscan::domain::Result<()> {
//! let engine = ScanEngine::builtin()?;
//! let findings = engine.scan("Contact: jane@example.com");
//!
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].detector_label, "Email");
//! assert_eq!(findings[0].matched_value, "jane@example.com");
//! assert_eq!(findings[0].category, ProtectionCategory::ContactInformation);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use super::classifier::classify;
use super::models::Finding;
use super::patterns::PatternRegistry;
use crate::domain::Result;
use std::sync::Arc;

/// Sensitive-data scan engine
///
/// # Thread Safety
///
/// The engine holds only an immutable, shared registry. It can be cloned
/// cheaply or wrapped in `Arc` and called from any number of tasks without
/// locking. The underlying `regex` automata match in time linear in the input
/// length, so no pattern can blow up on adversarial text.
#[derive(Debug, Clone)]
pub struct ScanEngine {
    registry: Arc<PatternRegistry>,
}

impl ScanEngine {
    /// Create an engine over an existing registry
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }

    /// Create an engine with the built-in detector table
    ///
    /// # Errors
    ///
    /// Fails only if a built-in pattern does not compile.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(PatternRegistry::builtin()?)))
    }

    /// Registry this engine scans with
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Scan a text for sensitive data
    ///
    /// Never fails: empty input and input without matches both yield an
    /// empty vector.
    pub fn scan(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        if text.is_empty() {
            return findings;
        }

        for rule in self.registry.all_rules() {
            let category = classify(rule.label());
            findings.extend(
                rule.find_values(text)
                    .map(|value| Finding::new(rule.label(), value, category)),
            );
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::models::ProtectionCategory;

    fn engine() -> ScanEngine {
        ScanEngine::builtin().unwrap()
    }

    fn summary(findings: &[Finding]) -> Vec<(&str, &str, ProtectionCategory)> {
        findings
            .iter()
            .map(|f| {
                (
                    f.detector_label.as_str(),
                    f.matched_value.as_str(),
                    f.category,
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(engine().scan("").is_empty());
    }

    #[test]
    fn test_text_without_matches() {
        let text = "The quick brown fox jumps over the lazy dog. 12-34 abc@ ok.";
        assert!(engine().scan(text).is_empty());
    }

    #[test]
    fn test_email_scenario() {
        let findings = engine().scan("Contact: jane@example.com");
        assert_eq!(
            summary(&findings),
            vec![(
                "Email",
                "jane@example.com",
                ProtectionCategory::ContactInformation
            )]
        );
    }

    #[test]
    fn test_ssn_scenario() {
        let findings = engine().scan("SSN: 123-45-6789");
        assert_eq!(
            summary(&findings),
            vec![("SSN", "123-45-6789", ProtectionCategory::Pii)]
        );
    }

    #[test]
    fn test_card_and_mrn_follow_registry_order() {
        let findings = engine().scan("Card 4111-1111-1111-1111 and MRN123456");
        assert_eq!(
            summary(&findings),
            vec![
                ("Medical Record", "MRN123456", ProtectionCategory::Phi),
                ("Credit Card", "4111-1111-1111-1111", ProtectionCategory::Pci),
                // The first twelve digits also satisfy the Aadhaar shape
                ("Aadhaar", "4111-1111-1111", ProtectionCategory::Pii),
            ]
        );
    }

    #[test]
    fn test_health_terms_scenario() {
        let findings = engine().scan("Diagnosis: Stroke. Result: Positive.");
        assert_eq!(
            summary(&findings),
            vec![
                ("Medical Test Results", "Result", ProtectionCategory::Phi),
                ("Medical Test Results", "Positive", ProtectionCategory::Phi),
                ("Diagnosis", "Stroke", ProtectionCategory::Phi),
            ]
        );
    }

    #[test]
    fn test_rule_order_beats_text_position() {
        // Email appears first in the text but SSN is registered earlier
        let findings = engine().scan("jane@example.com 123-45-6789");
        let labels: Vec<&str> = findings.iter().map(|f| f.detector_label.as_str()).collect();
        assert_eq!(labels, vec!["SSN", "Email"]);
    }

    #[test]
    fn test_duplicates_are_reported() {
        let findings = engine().scan("HIN12345, again HIN12345");
        assert_eq!(
            summary(&findings),
            vec![
                (
                    "Health Insurance",
                    "HIN12345",
                    ProtectionCategory::InsuranceInformation
                ),
                (
                    "Health Insurance",
                    "HIN12345",
                    ProtectionCategory::InsuranceInformation
                ),
            ]
        );
    }

    #[test]
    fn test_scan_is_deterministic() {
        let text = "PAN ABCDE1234F, passport K12345678, mail a@b.io, Dementia, 1234 5678 9012";
        let engine = engine();
        let first = engine.scan(text);
        for _ in 0..5 {
            assert_eq!(engine.scan(text), first);
        }
    }

    #[test]
    fn test_unknown_label_is_not_an_error() {
        let registry = PatternRegistry::from_definitions([("Ticket", r"TCK-\d+")]).unwrap();
        let engine = ScanEngine::new(Arc::new(registry));
        let findings = engine.scan("see TCK-42");
        assert_eq!(
            summary(&findings),
            vec![("Ticket", "TCK-42", ProtectionCategory::Unknown)]
        );
    }

    #[test]
    fn test_concurrent_scans_agree() {
        let engine = Arc::new(engine());
        let text = "SSN 123-45-6789 MRN654321 HIN55555 jane@example.com Hypertension";
        let expected = engine.scan(text);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.scan(text))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_large_input_completes() {
        // Long runs of near-miss characters must not degrade matching
        let text = format!("{}@{}", "a".repeat(50_000), "b".repeat(50_000));
        assert!(engine().scan(&text).is_empty());
    }
}
