//! Persisted scan result records

use super::ids::DocumentName;
use crate::detection::{Finding, ProtectionCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A finding bound to a document, ready to be persisted
///
/// The store assigns the creation timestamp on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub document_name: DocumentName,
    pub detector_label: String,
    pub matched_value: String,
    pub category: ProtectionCategory,
}

impl NewRecord {
    /// Bind a finding to the document it was found in
    pub fn from_finding(document_name: &DocumentName, finding: &Finding) -> Self {
        Self {
            document_name: document_name.clone(),
            detector_label: finding.detector_label.clone(),
            matched_value: finding.matched_value.clone(),
            category: finding.category,
        }
    }

    /// Attach a creation timestamp
    pub fn into_record(self, created_at: DateTime<Utc>) -> Record {
        Record {
            document_name: self.document_name,
            detector_label: self.detector_label,
            matched_value: self.matched_value,
            category: self.category,
            created_at,
        }
    }
}

/// A stored scan result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub document_name: DocumentName,
    pub detector_label: String,
    pub matched_value: String,
    pub category: ProtectionCategory,
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Strip persistence metadata and return the underlying finding
    pub fn to_finding(&self) -> Finding {
        Finding::new(
            self.detector_label.clone(),
            self.matched_value.clone(),
            self.category,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_finding() {
        let document = DocumentName::new("claims.csv").unwrap();
        let finding = Finding::new("Credit Card", "4111-1111-1111-1111", ProtectionCategory::Pci);

        let record = NewRecord::from_finding(&document, &finding);
        assert_eq!(record.document_name.as_str(), "claims.csv");
        assert_eq!(record.detector_label, "Credit Card");
        assert_eq!(record.matched_value, "4111-1111-1111-1111");
        assert_eq!(record.category, ProtectionCategory::Pci);
    }

    #[test]
    fn test_into_record_round_trips_finding() {
        let document = DocumentName::new("notes.txt").unwrap();
        let finding = Finding::new("Email", "a@b.io", ProtectionCategory::ContactInformation);
        let now = Utc::now();

        let record = NewRecord::from_finding(&document, &finding).into_record(now);
        assert_eq!(record.created_at, now);
        assert_eq!(record.to_finding(), finding);
    }

    #[test]
    fn test_record_serialization_uses_category_names() {
        let document = DocumentName::new("notes.txt").unwrap();
        let finding = Finding::new("HIN", "HIN12345", ProtectionCategory::InsuranceInformation);
        let record = NewRecord::from_finding(&document, &finding).into_record(Utc::now());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["category"], "InsuranceInformation");
        assert_eq!(json["document_name"], "notes.txt");
    }
}
