//! Pattern registry for sensitive-data detection
//!
//! The registry is an ordered list of detector rules compiled once at startup.
//! Rule order is part of the scan contract: findings are reported rule by rule
//! in registry order, so the built-in table below must only ever be appended
//! to or deliberately reordered.

use crate::domain::{DocscanError, Result};
use regex::Regex;
use std::collections::HashSet;

/// Detector labels used by the built-in registry
pub mod labels {
    pub const PAN: &str = "PAN";
    pub const SSN: &str = "SSN";
    pub const PASSPORT: &str = "Passport";
    pub const MEDICAL_RECORD: &str = "Medical Record";
    pub const MEDICAL_TEST_RESULTS: &str = "Medical Test Results";
    pub const HEALTH_INSURANCE: &str = "Health Insurance";
    pub const CREDIT_CARD: &str = "Credit Card";
    pub const AADHAAR: &str = "Aadhaar";
    pub const EMAIL: &str = "Email";
    pub const DIAGNOSIS: &str = "Diagnosis";
}

/// Built-in detector table, in scan order
///
/// Matching is case-sensitive. Rules with a capture group report the group's
/// text rather than the whole match.
pub const BUILTIN_RULES: &[(&str, &str)] = &[
    (labels::PAN, r"\b[A-Z]{5}[0-9]{4}[A-Z]\b"),
    (labels::SSN, r"\b\d{3}-\d{2}-\d{4}\b"),
    (labels::PASSPORT, r"\b[A-Z]{1}[0-9]{7}\b|\b[K][0-9]{8}\b"),
    (labels::MEDICAL_RECORD, r"\b(MRN\d{6})\b"),
    (
        labels::MEDICAL_TEST_RESULTS,
        r"\b(Result|Positive|Negative|Detected|Not Detected)\b",
    ),
    (labels::HEALTH_INSURANCE, r"\bHIN\d{5}\b"),
    (labels::CREDIT_CARD, r"\b(?:\d{4}[- ]?){3}\d{4}\b"),
    (labels::AADHAAR, r"\b\d{4}[- ]?\d{4}[- ]?\d{4}\b"),
    (labels::EMAIL, r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"),
    (
        labels::DIAGNOSIS,
        r"\b(Dementia|Stroke|Hypertension|Hyperlipidemia|Cardiac Failure|Renal Disease)\b",
    ),
];

/// A named, compiled detection rule
#[derive(Debug, Clone)]
pub struct DetectorRule {
    label: String,
    regex: Regex,
    /// Capture group reported as the matched value (0 = whole match)
    value_group: usize,
}

impl DetectorRule {
    /// Compile a rule from its label and pattern
    ///
    /// # Errors
    ///
    /// Returns [`DocscanError::Pattern`] if the pattern does not compile.
    pub fn new(label: impl Into<String>, pattern: &str) -> Result<Self> {
        let label = label.into();
        let regex = Regex::new(pattern).map_err(|e| DocscanError::Pattern {
            label: label.clone(),
            message: e.to_string(),
        })?;

        // captures_len counts the implicit whole-match group
        let value_group = if regex.captures_len() > 1 { 1 } else { 0 };

        Ok(Self {
            label,
            regex,
            value_group,
        })
    }

    /// Detector label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Source pattern
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether matches report a capture group instead of the whole match
    pub fn reports_capture_group(&self) -> bool {
        self.value_group != 0
    }

    /// Iterate over matched values, left to right, non-overlapping
    ///
    /// A capture group that did not take part in a match yields an empty
    /// string.
    pub fn find_values<'r, 't>(&'r self, text: &'t str) -> impl Iterator<Item = &'t str> + 'r
    where
        't: 'r,
    {
        self.regex.captures_iter(text).map(move |caps| {
            caps.get(self.value_group)
                .map(|m| m.as_str())
                .unwrap_or_default()
        })
    }
}

/// Ordered, immutable collection of detector rules
///
/// There is no mutation API; share it behind an `Arc` across concurrent scans.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: Vec<DetectorRule>,
}

impl PatternRegistry {
    /// Build the registry from the built-in detector table
    ///
    /// # Errors
    ///
    /// Fails if any built-in pattern does not compile. Callers treat this as
    /// a fatal startup error.
    pub fn builtin() -> Result<Self> {
        Self::from_definitions(BUILTIN_RULES.iter().copied())
    }

    /// Build a registry from `(label, pattern)` pairs, preserving their order
    ///
    /// # Errors
    ///
    /// Fails on the first pattern that does not compile, or on a repeated label.
    /// No rule is ever skipped.
    pub fn from_definitions<I, L, P>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, P)>,
        L: Into<String>,
        P: AsRef<str>,
    {
        let mut rules = Vec::new();
        let mut seen = HashSet::new();

        for (label, pattern) in definitions {
            let rule = DetectorRule::new(label, pattern.as_ref())?;

            if !seen.insert(rule.label.clone()) {
                return Err(DocscanError::Configuration(format!(
                    "Duplicate detector label: {}",
                    rule.label
                )));
            }

            rules.push(rule);
        }

        Ok(Self { rules })
    }

    /// All rules in scan order
    pub fn all_rules(&self) -> &[DetectorRule] {
        &self.rules
    }

    /// Look up a rule by label
    pub fn get(&self, label: &str) -> Option<&DetectorRule> {
        self.rules.iter().find(|r| r.label == label)
    }

    /// Labels in scan order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.label.as_str())
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
