//! Domain types for Docscan.
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`DocumentName`])
//! - **Persisted records** ([`Record`], [`NewRecord`])
//! - **Error types** ([`DocscanError`], [`ExtractionError`], [`StorageError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, DocscanError>`]:
//!
//! ```rust
//! use docscan::domain::{DocscanError, Result};
//!
//! fn example() -> Result<()> {
//!     let _config = docscan::config::load_config("docscan.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

pub use errors::{DocscanError, ExtractionError, StorageError};
pub use ids::DocumentName;
pub use record::{NewRecord, Record};
pub use result::Result;
