//! Validate config command implementation
//!
//! Validates the configuration file and checks that the configured store is
//! reachable.

use super::{EXIT_CONFIG, EXIT_CONNECTION, EXIT_OK};
use crate::adapters::database::create_finding_store;
use crate::config::load_config;
use crate::config::schema::DatabaseTarget;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Only validate the file, don't connect to the store
    #[arg(long)]
    pub skip_connection: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Max Input Bytes: {}", config.scan.max_input_bytes);
        println!(
            "  Max Concurrent Documents: {}",
            config.scan.max_concurrent_documents
        );
        println!(
            "  Allowed Extensions: {}",
            config.extraction.allowed_extensions.join(", ")
        );
        println!("  Max File Size: {} MB", config.extraction.max_file_size_mb);

        match config.database_target {
            DatabaseTarget::PostgreSQL => {
                println!("  Database Target: PostgreSQL");
                if let Some(ref pg_config) = config.postgresql {
                    println!("  SSL Mode: {}", pg_config.ssl_mode);
                    println!("  Max Connections: {}", pg_config.max_connections);
                }
            }
            DatabaseTarget::Memory => {
                println!("  Database Target: Memory (results are not kept between runs)");
            }
        }

        if config.audit.enabled {
            println!("  Audit Log: {}", config.audit.log_path.display());
        } else {
            println!("  Audit Log: disabled");
        }
        println!();

        if self.skip_connection {
            return Ok(EXIT_OK);
        }

        println!("🔌 Checking store connection...");
        let store = match create_finding_store(&config).await {
            Ok(s) => s,
            Err(e) => {
                println!("❌ Failed to create store");
                println!("   Error: {e}");
                return Ok(EXIT_CONNECTION);
            }
        };

        match store.test_connection().await {
            Ok(()) => {
                println!("✅ {} store is reachable", store.store_name());
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                tracing::error!(error = %e, store = store.store_name(), "Store health check failed");
                println!("❌ {} store is unreachable", store.store_name());
                println!("   Error: {e}");
                Ok(EXIT_CONNECTION)
            }
        }
    }
}
