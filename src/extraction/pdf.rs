//! PDF text extractor
//!
//! Reads the text layer of each page with `lopdf` and concatenates the page
//! texts in page order. Pages without a text layer, such as scanned images,
//! contribute nothing, so an image-only PDF is reported as empty.

use super::{unsupported_format, TextExtractor};
use crate::config::ExtractionConfig;
use crate::domain::{DocumentName, ExtractionError};
use lopdf::Document;

pub const PDF_EXTENSION: &str = "pdf";

/// Extractor for PDF documents
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    max_bytes: usize,
}

impl PdfExtractor {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(config.max_file_size_bytes())
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

impl TextExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn supports(&self, extension: &str) -> bool {
        extension == PDF_EXTENSION
    }

    fn extract(&self, document: &DocumentName, bytes: &[u8]) -> Result<String, ExtractionError> {
        let extension = document.extension().unwrap_or_default();
        if !self.supports(&extension) {
            return Err(unsupported_format(document, &extension));
        }

        if bytes.len() > self.max_bytes {
            return Err(ExtractionError::TooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }

        let pdf = Document::load_mem(bytes)
            .map_err(|e| ExtractionError::Malformed(format!("'{document}': {e}")))?;

        let pages = pdf.get_pages();
        let mut text = String::new();
        for page_number in pages.keys() {
            let page_text = pdf.extract_text(&[*page_number]).map_err(|e| {
                ExtractionError::Malformed(format!("'{document}' page {page_number}: {e}"))
            })?;
            text.push_str(&page_text);
        }

        tracing::debug!(
            document = %document,
            pages = pages.len(),
            chars = text.len(),
            "Extracted PDF text"
        );

        if text.trim().is_empty() {
            return Err(ExtractionError::Empty(document.to_string()));
        }

        Ok(text)
    }
}
