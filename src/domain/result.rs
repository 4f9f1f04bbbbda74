//! Result type alias for Docscan

use super::errors::DocscanError;

/// Result type alias for Docscan operations
///
/// # Examples
///
/// ```
/// use docscan::domain::result::Result;
/// use docscan::domain::errors::DocscanError;
///
/// fn failing_function() -> Result<()> {
///     Err(DocscanError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DocscanError>;
