//! Extension-based extractor routing

use super::{unsupported_format, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::config::ExtractionConfig;
use crate::domain::{DocumentName, ExtractionError};

/// Routes each document to the first extractor that supports its extension
///
/// Extensions outside the allow-list are rejected before any extractor runs.
pub struct CompositeExtractor {
    allowed_extensions: Vec<String>,
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl CompositeExtractor {
    pub fn new(allowed_extensions: Vec<String>, extractors: Vec<Box<dyn TextExtractor>>) -> Self {
        Self {
            allowed_extensions,
            extractors,
        }
    }

    /// PDF and plain-text extractors sharing the configured limits
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(
            config.allowed_extensions.clone(),
            vec![
                Box::new(PdfExtractor::from_config(config)),
                Box::new(PlainTextExtractor::from_config(config)),
            ],
        )
    }

    fn route(&self, extension: &str) -> Option<&dyn TextExtractor> {
        if !self.allowed_extensions.iter().any(|ext| ext == extension) {
            return None;
        }
        self.extractors
            .iter()
            .find(|extractor| extractor.supports(extension))
            .map(|extractor| extractor.as_ref())
    }
}

impl Default for CompositeExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

impl TextExtractor for CompositeExtractor {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn supports(&self, extension: &str) -> bool {
        self.route(extension).is_some()
    }

    fn extract(&self, document: &DocumentName, bytes: &[u8]) -> Result<String, ExtractionError> {
        let extension = document.extension().unwrap_or_default();
        let extractor = self
            .route(&extension)
            .ok_or_else(|| unsupported_format(document, &extension))?;

        tracing::debug!(document = %document, extractor = extractor.name(), "Extracting text");
        extractor.extract(document, bytes)
    }
}
