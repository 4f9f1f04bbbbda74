//! Logging and observability
//!
//! Structured logging with:
//! - Console output for operators
//! - Optional JSON log files with rotation
//! - Configurable log levels
//!
//! Matched values are never written to logs; events carry labels, counts,
//! and document names only.
//!
//! # Example
//!
//! ```no_run
//! use docscan::logging::init_logging;
//! use docscan::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Scanner started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a document scan
///
/// # Example
///
/// ```no_run
/// use docscan::log_scan_start;
/// use docscan::domain::DocumentName;
///
/// let document = DocumentName::new("intake.txt").unwrap();
/// log_scan_start!(&document, 2048);
/// ```
#[macro_export]
macro_rules! log_scan_start {
    ($document:expr, $bytes:expr) => {
        tracing::info!(
            document = %$document,
            bytes = $bytes,
            "Starting document scan"
        );
    };
}

/// Log the completion of a document scan
///
/// # Example
///
/// ```no_run
/// use docscan::log_scan_complete;
/// use docscan::domain::DocumentName;
/// use std::time::Duration;
///
/// let document = DocumentName::new("intake.txt").unwrap();
/// log_scan_complete!(&document, 3, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_scan_complete {
    ($document:expr, $findings:expr, $duration:expr) => {
        tracing::info!(
            document = %$document,
            findings = $findings,
            duration_ms = $duration.as_millis() as u64,
            "Document scan completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use docscan::log_error_with_context;
/// use docscan::domain::DocscanError;
///
/// let error = DocscanError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::{DocscanError, DocumentName};
    use std::time::Duration;

    #[test]
    fn test_macros_expand_without_subscriber() {
        let document = DocumentName::new("intake.txt").unwrap();
        log_scan_start!(&document, 16usize);
        log_scan_complete!(&document, 2usize, Duration::from_millis(3));
        let error = DocscanError::Other("boom".to_string());
        log_error_with_context!(&error, "while testing");
    }
}
