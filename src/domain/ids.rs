//! Domain identifier types with validation
//!
//! Newtype wrappers keep document names from being mixed up with detector
//! labels or matched values, both of which are plain strings as well.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a document name, matching the `file_name` column width.
pub const MAX_DOCUMENT_NAME_LEN: usize = 255;

/// Name of a scanned document
///
/// Findings are persisted and retrieved by this name. Directory components are
/// stripped on construction so that a caller-supplied path can never address
/// anything but the file name itself.
///
/// # Examples
///
/// ```
/// use docscan::domain::ids::DocumentName;
///
/// let name = DocumentName::new("../uploads/patient_report.txt").unwrap();
/// assert_eq!(name.as_str(), "patient_report.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentName(String);

impl DocumentName {
    /// Creates a new DocumentName, keeping only the final path component
    ///
    /// # Returns
    ///
    /// Returns `Err` if nothing usable is left after sanitizing, or if the
    /// name exceeds [`MAX_DOCUMENT_NAME_LEN`] bytes.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let base = name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim();

        if base.is_empty() || base == "." || base == ".." {
            return Err(format!("Document name cannot be empty: '{name}'"));
        }

        if base.chars().any(char::is_control) {
            return Err("Document name cannot contain control characters".to_string());
        }

        if base.len() > MAX_DOCUMENT_NAME_LEN {
            return Err(format!(
                "Document name exceeds {MAX_DOCUMENT_NAME_LEN} bytes: {} bytes",
                base.len()
            ));
        }

        Ok(Self(base.to_string()))
    }

    /// Returns the document name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lowercase file extension, if any
    pub fn extension(&self) -> Option<String> {
        self.0
            .rsplit_once('.')
            .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DocumentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
