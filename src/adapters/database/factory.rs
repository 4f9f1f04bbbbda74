//! Findings store factory
//!
//! Creates the store selected by `database_target`.

use crate::adapters::database::traits::FindingStore;
use crate::adapters::memory::MemoryStore;
use crate::adapters::postgresql::adapter::PostgreSQLAdapter;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::config::schema::{DatabaseTarget, DocscanConfig};
use crate::domain::{DocscanError, Result};
use std::sync::Arc;

/// Create a findings store based on the configuration
///
/// # Errors
///
/// Returns an error if the PostgreSQL section is missing for the
/// `postgresql` target or the connection pool cannot be created.
pub async fn create_finding_store(
    config: &DocscanConfig,
) -> Result<Arc<dyn FindingStore + Send + Sync>> {
    match config.database_target {
        DatabaseTarget::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                DocscanError::Configuration(
                    "postgresql configuration is required when database_target = 'postgresql'"
                        .to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL findings store");
            let client = PostgreSQLClient::new(pg_config.clone()).await?;
            let adapter = PostgreSQLAdapter::new(client);

            Ok(Arc::new(adapter) as Arc<dyn FindingStore + Send + Sync>)
        }
        DatabaseTarget::Memory => {
            tracing::info!("Creating in-memory findings store");
            Ok(Arc::new(MemoryStore::new()) as Arc<dyn FindingStore + Send + Sync>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_target() {
        let config = DocscanConfig::default();
        let store = create_finding_store(&config).await.unwrap();
        assert_eq!(store.store_name(), "memory");
        assert!(store.test_connection().await.is_ok());
    }

    #[tokio::test]
    async fn test_postgresql_target_without_section() {
        let config = DocscanConfig {
            database_target: DatabaseTarget::PostgreSQL,
            ..Default::default()
        };
        let result = create_finding_store(&config).await;
        assert!(matches!(result, Err(DocscanError::Configuration(_))));
    }
}
