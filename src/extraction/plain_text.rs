//! UTF-8 text extractor for plain-text document formats

use super::pdf::PDF_EXTENSION;
use super::{unsupported_format, TextExtractor};
use crate::config::ExtractionConfig;
use crate::domain::{DocumentName, ExtractionError};

const UTF8_BOM: &str = "\u{feff}";

/// Extractor for UTF-8 text files (`txt`, `md`, `csv`, `log` by default)
///
/// Binary formats listed in the configuration are left to their own
/// extractors.
#[derive(Debug, Clone)]
pub struct PlainTextExtractor {
    allowed_extensions: Vec<String>,
    max_bytes: usize,
}

impl PlainTextExtractor {
    pub fn new(allowed_extensions: Vec<String>, max_bytes: usize) -> Self {
        Self {
            allowed_extensions,
            max_bytes,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        let text_extensions = config
            .allowed_extensions
            .iter()
            .filter(|ext| ext.as_str() != PDF_EXTENSION)
            .cloned()
            .collect();
        Self::new(text_extensions, config.max_file_size_bytes())
    }

    /// Size limit in bytes
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

impl TextExtractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "plain_text"
    }

    fn supports(&self, extension: &str) -> bool {
        self.allowed_extensions.iter().any(|ext| ext == extension)
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

        let text = std::str::from_utf8(bytes).map_err(|e| {
            ExtractionError::InvalidEncoding(format!(
                "'{document}' at byte {}",
                e.valid_up_to()
            ))
        })?;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

        if text.trim().is_empty() {
            return Err(ExtractionError::Empty(document.to_string()));
        }

        Ok(text.to_string())
    }
}
