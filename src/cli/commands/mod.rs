//! CLI command implementations
//!
//! Commands return process exit codes:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 2 | Configuration error |
//! | 3 | One or more documents could not be extracted |
//! | 4 | Store connection or storage error |
//! | 5 | Fatal error |
//! | 130 | Interrupted by a shutdown signal |

pub mod delete;
pub mod init;
pub mod results;
pub mod scan;
pub mod validate;

use crate::adapters::database::{create_finding_store, FindingStore};
use crate::config::{load_config, DocscanConfig};
use std::sync::Arc;

pub const EXIT_OK: i32 = 0;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_EXTRACTION: i32 = 3;
pub const EXIT_CONNECTION: i32 = 4;
pub const EXIT_FATAL: i32 = 5;
pub const EXIT_INTERRUPTED: i32 = 130;

/// Load and validate the configuration, printing the failure
pub(crate) fn load_validated_config(config_path: &str) -> Result<DocscanConfig, i32> {
    // load_config validates before returning
    load_config(config_path).map_err(|e| {
        tracing::error!(error = %e, config_path = %config_path, "Failed to load configuration");
        eprintln!("❌ {e}");
        EXIT_CONFIG
    })
}

/// Create the configured store and make sure its schema exists
pub(crate) async fn open_store(
    config: &DocscanConfig,
) -> Result<Arc<dyn FindingStore + Send + Sync>, i32> {
    let store = match create_finding_store(config).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create findings store");
            eprintln!("❌ Failed to create findings store: {e}");
            return Err(EXIT_CONNECTION);
        }
    };

    if let Err(e) = store.ensure_schema().await {
        tracing::error!(error = %e, store = store.store_name(), "Failed to prepare store schema");
        eprintln!("❌ Failed to prepare {} store: {e}", store.store_name());
        return Err(EXIT_CONNECTION);
    }

    Ok(store)
}
