//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Docscan error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum DocscanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A detector pattern failed to compile
    ///
    /// Raised only while building the pattern registry at startup; the
    /// registry refuses to come up with a broken rule.
    #[error("Invalid pattern for detector '{label}': {message}")]
    Pattern { label: String, message: String },

    /// Text extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Database-related errors (generic)
    #[error("Database error: {0}")]
    Database(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Text extraction errors
///
/// Reported by the extraction collaborator before the scan engine is invoked,
/// so a failed extraction never shows up as "no findings".
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Extraction produced no text
    #[error("No text could be extracted from '{0}'")]
    Empty(String),

    /// The document format is not supported
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The document content is not valid text
    #[error("Document is not valid UTF-8 text: {0}")]
    InvalidEncoding(String),

    /// The document structure could not be parsed
    #[error("Document could not be parsed: {0}")]
    Malformed(String),

    /// The document exceeds the configured size limit
    #[error("Document too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}

/// Storage-specific errors
///
/// Errors raised by the findings store. These errors don't expose
/// third-party driver types.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to connect to the store
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// Failed to insert records
    #[error("Failed to insert records: {0}")]
    InsertFailed(String),

    /// Failed to query records
    #[error("Failed to query records: {0}")]
    QueryFailed(String),

    /// Failed to delete records
    #[error("Failed to delete records: {0}")]
    DeleteFailed(String),

    /// A stored row could not be mapped back to a record
    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for DocscanError {
    fn from(err: std::io::Error) -> Self {
        DocscanError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DocscanError {
    fn from(err: serde_json::Error) -> Self {
        DocscanError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DocscanError {
    fn from(err: toml::de::Error) -> Self {
        DocscanError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docscan_error_display() {
        let err = DocscanError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_pattern_error_names_detector() {
        let err = DocscanError::Pattern {
            label: "SSN".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid pattern for detector 'SSN': unclosed group"
        );
    }

    #[test]
    fn test_extraction_error_conversion() {
        let err: DocscanError = ExtractionError::Empty("scan.txt".to_string()).into();
        assert!(matches!(err, DocscanError::Extraction(_)));
        assert!(err.to_string().contains("scan.txt"));
    }

    #[test]
    fn test_too_large_display() {
        let err = ExtractionError::TooLarge {
            size: 2048,
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "Document too large: 2048 bytes exceeds limit of 1024 bytes"
        );
    }

    #[test]
    fn test_storage_error_conversion() {
        let err: DocscanError = StorageError::InsertFailed("timeout".to_string()).into();
        assert!(matches!(err, DocscanError::Storage(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: DocscanError = io_err.into();
        assert!(matches!(err, DocscanError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DocscanError = json_err.into();
        assert!(matches!(err, DocscanError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: DocscanError = toml_err.into();
        assert!(matches!(err, DocscanError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &DocscanError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &ExtractionError::Empty("a.txt".to_string());
        let _: &dyn std::error::Error = &StorageError::QueryFailed("boom".to_string());
    }
}
