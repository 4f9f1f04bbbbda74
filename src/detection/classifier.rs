//! Label to protection-category mapping

use super::models::ProtectionCategory;
use super::patterns::labels;

/// Map a detector label to its protection category
///
/// Total and side-effect free. Labels outside the table fall into
/// [`ProtectionCategory::Unknown`], which is a regular result and not an error.
///
/// # Examples
///
/// ```
/// use docscan::detection::{classify, ProtectionCategory};
///
/// assert_eq!(classify("Credit Card"), ProtectionCategory::Pci);
/// assert_eq!(classify("Licence Plate"), ProtectionCategory::Unknown);
/// ```
pub fn classify(label: &str) -> ProtectionCategory {
    match label {
        labels::PAN | labels::SSN | labels::PASSPORT | labels::AADHAAR => ProtectionCategory::Pii,
        labels::MEDICAL_RECORD | labels::MEDICAL_TEST_RESULTS | labels::DIAGNOSIS => {
            ProtectionCategory::Phi
        }
        labels::CREDIT_CARD => ProtectionCategory::Pci,
        labels::EMAIL => ProtectionCategory::ContactInformation,
        labels::HEALTH_INSURANCE => ProtectionCategory::InsuranceInformation,
        _ => ProtectionCategory::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::patterns::PatternRegistry;
    use test_case::test_case;

    #[test_case("PAN", ProtectionCategory::Pii)]
    #[test_case("SSN", ProtectionCategory::Pii)]
    #[test_case("Passport", ProtectionCategory::Pii)]
    #[test_case("Aadhaar", ProtectionCategory::Pii)]
    #[test_case("Medical Record", ProtectionCategory::Phi)]
    #[test_case("Medical Test Results", ProtectionCategory::Phi)]
    #[test_case("Diagnosis", ProtectionCategory::Phi)]
    #[test_case("Credit Card", ProtectionCategory::Pci)]
    #[test_case("Email", ProtectionCategory::ContactInformation)]
    #[test_case("Health Insurance", ProtectionCategory::InsuranceInformation)]
    fn test_classify_known_labels(label: &str, expected: ProtectionCategory) {
        assert_eq!(classify(label), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("email" ; "wrong case")]
    #[test_case("Phone" ; "unregistered")]
    #[test_case(" SSN" ; "leading space")]
    fn test_classify_unknown_labels(label: &str) {
        assert_eq!(classify(label), ProtectionCategory::Unknown);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify("Email"), ProtectionCategory::ContactInformation);
            assert_eq!(classify("Nope"), ProtectionCategory::Unknown);
        }
    }

    #[test]
    fn test_every_builtin_label_is_classified() {
        let registry = PatternRegistry::builtin().unwrap();
        for label in registry.labels() {
            assert_ne!(
                classify(label),
                ProtectionCategory::Unknown,
                "built-in label '{label}' has no category"
            );
        }
    }
}
