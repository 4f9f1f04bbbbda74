//! Detection data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Data-protection category a finding belongs to
///
/// This is a closed set. The serialized names are the stable vocabulary seen
/// by API consumers and stored with every record, so they must not change
/// without migrating persisted data. The spaced spellings written by earlier
/// releases (`Contact Information`, `Insurance Information`) are still
/// accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProtectionCategory {
    /// Personally Identifiable Information
    #[serde(rename = "PII")]
    Pii,
    /// Protected Health Information
    #[serde(rename = "PHI")]
    Phi,
    /// Payment Card Information
    #[serde(rename = "PCI")]
    Pci,
    /// Contact details such as email addresses
    #[serde(alias = "Contact Information")]
    ContactInformation,
    /// Insurance identifiers
    #[serde(alias = "Insurance Information")]
    InsuranceInformation,
    /// Label not known to the classifier
    Unknown,
}

impl ProtectionCategory {
    /// All categories, in declaration order
    pub const ALL: [ProtectionCategory; 6] = [
        Self::Pii,
        Self::Phi,
        Self::Pci,
        Self::ContactInformation,
        Self::InsuranceInformation,
        Self::Unknown,
    ];

    /// Stable wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pii => "PII",
            Self::Phi => "PHI",
            Self::Pci => "PCI",
            Self::ContactInformation => "ContactInformation",
            Self::InsuranceInformation => "InsuranceInformation",
            Self::Unknown => "Unknown",
        }
    }

    /// Human-readable description for reports
    pub fn description(&self) -> &'static str {
        match self {
            Self::Pii => "Personally Identifiable Information",
            Self::Phi => "Protected Health Information",
            Self::Pci => "Payment Card Information",
            Self::ContactInformation => "Contact Information",
            Self::InsuranceInformation => "Insurance Information",
            Self::Unknown => "Unclassified",
        }
    }
}

impl fmt::Display for ProtectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtectionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PII" => Ok(Self::Pii),
            "PHI" => Ok(Self::Phi),
            "PCI" => Ok(Self::Pci),
            "ContactInformation" | "Contact Information" => Ok(Self::ContactInformation),
            "InsuranceInformation" | "Insurance Information" => Ok(Self::InsuranceInformation),
            "Unknown" => Ok(Self::Unknown),
            _ => Err(format!("Unknown protection category: {s}")),
        }
    }
}

/// One matched occurrence of a detector rule in a text
///
/// Findings carry no identity beyond their fields. Two findings with equal
/// fields are both reported when the text contains the value twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    /// Label of the detector rule that produced this finding
    pub detector_label: String,
    /// Matched text, or the first capture group for rules that define one
    pub matched_value: String,
    /// Category derived from `detector_label`
    pub category: ProtectionCategory,
}

impl Finding {
    /// Create a new finding
    pub fn new(
        detector_label: impl Into<String>,
        matched_value: impl Into<String>,
        category: ProtectionCategory,
    ) -> Self {
        Self {
            detector_label: detector_label.into(),
            matched_value: matched_value.into(),
            category,
        }
    }
}
