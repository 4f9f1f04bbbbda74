//! Configuration management for Docscan.
//!
//! Docscan reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `DOCSCAN_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docscan::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("docscan.toml")?;
//! println!("Max input: {} bytes", config.scan.max_input_bytes);
//! println!("Target: {:?}", config.database_target);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! database_target = "postgresql"
//!
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [scan]
//! max_input_bytes = 10485760
//! max_concurrent_documents = 4
//!
//! [extraction]
//! max_file_size_mb = 16
//! allowed_extensions = ["txt", "md", "csv", "log", "pdf"]
//!
//! [postgresql]
//! connection_string = "${DOCSCAN_PG_URL}"
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/docscan_audit.log"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str};
pub use schema::{
    ApplicationConfig, AuditConfig, DatabaseTarget, DocscanConfig, ExtractionConfig,
    LoggingConfig, PostgreSQLConfig, ScanConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
