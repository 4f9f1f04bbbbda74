//! Text extraction
//!
//! Extractors turn raw document bytes into the text handed to the scan
//! engine. An extractor that cannot produce any text reports
//! [`ExtractionError::Empty`]; callers must treat that as a failure and never
//! as a document without findings.
//!
//! [`CompositeExtractor`] routes each document to the extractor registered
//! for its extension.

pub mod composite;
pub mod pdf;
pub mod plain_text;

use crate::domain::{DocumentName, ExtractionError};

pub use composite::CompositeExtractor;
pub use pdf::PdfExtractor;
pub use plain_text::PlainTextExtractor;

/// Converts document bytes into scannable text
pub trait TextExtractor: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether this extractor handles the given lowercase extension
    fn supports(&self, extension: &str) -> bool;

    /// Extract the text of a document
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] when the format is unsupported, the
    /// document is too large or unreadable, or no text remains after
    /// extraction.
    fn extract(&self, document: &DocumentName, bytes: &[u8]) -> Result<String, ExtractionError>;
}

pub(crate) fn unsupported_format(document: &DocumentName, extension: &str) -> ExtractionError {
    ExtractionError::UnsupportedFormat(if extension.is_empty() {
        format!("'{document}' has no file extension")
    } else {
        format!("'.{extension}' files are not supported")
    })
}
