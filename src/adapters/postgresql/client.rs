//! PostgreSQL client implementation
//!
//! Connection pooling, schema setup, and statement execution for the
//! `scan_results` table.

use crate::adapters::postgresql::models::ScanResultInsert;
use crate::config::schema::PostgreSQLConfig;
use crate::domain::{DocscanError, Result, StorageError};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use postgres_native_tls::MakeTlsConnector;
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::config::SslMode;
use tokio_postgres::{NoTls, Row};

const INSERT_SCAN_RESULT: &str = r#"
    INSERT INTO scan_results (file_name, result_type, result_value, classification)
    VALUES ($1, $2, $3, $4)
"#;

/// PostgreSQL client for Docscan
pub struct PostgreSQLClient {
    pool: Pool,
    config: PostgreSQLConfig,
}

impl PostgreSQLClient {
    /// Create a new PostgreSQL client
    ///
    /// The pool connects lazily; use [`Self::test_connection`] to verify
    /// the server is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is invalid or the pool
    /// cannot be built.
    pub async fn new(config: PostgreSQLConfig) -> Result<Self> {
        let mut pg_config: tokio_postgres::Config =
            config.connection_string.expose_secret().parse().map_err(|e| {
                DocscanError::Configuration(format!("Invalid PostgreSQL connection string: {}", e))
            })?;
        pg_config.ssl_mode(ssl_mode(&config.ssl_mode));

        let manager_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };

        let manager = match tls_connector(&config.ssl_mode)? {
            Some(tls) => Manager::from_config(pg_config, tls, manager_config),
            None => Manager::from_config(pg_config, NoTls, manager_config),
        };

        let timeout = Some(Duration::from_secs(config.connection_timeout_seconds));
        let pool = Pool::builder(manager)
            .max_size(config.max_connections)
            .wait_timeout(timeout)
            .create_timeout(timeout)
            .recycle_timeout(timeout)
            .runtime(deadpool_postgres::Runtime::Tokio1)
            .build()
            .map_err(|e| {
                DocscanError::Database(format!("Failed to create connection pool: {}", e))
            })?;

        Ok(Self { pool, config })
    }

    /// Test the connection to PostgreSQL
    pub async fn test_connection(&self) -> Result<()> {
        let client = self.get_connection().await?;

        client.query_one("SELECT 1", &[]).await.map_err(|e| {
            StorageError::ConnectionFailed(format!("Connection test failed: {}", e))
        })?;

        tracing::info!(server = %self.connection_string_safe(), "PostgreSQL connection test successful");
        Ok(())
    }

    /// Create the `scan_results` table and indexes if they don't exist
    pub async fn ensure_schema(&self) -> Result<()> {
        let client = self.get_connection().await?;

        let migration_sql = include_str!("../../../migrations/001_scan_results.sql");

        client
            .batch_execute(migration_sql)
            .await
            .map_err(|e| DocscanError::Database(format!("Failed to execute migration: {}", e)))?;

        tracing::info!("PostgreSQL schema initialized successfully");
        Ok(())
    }

    /// Get a connection from the pool
    pub async fn get_connection(&self) -> Result<deadpool_postgres::Object> {
        self.pool.get().await.map_err(|e| {
            DocscanError::Storage(StorageError::ConnectionFailed(format!(
                "Failed to get connection from pool: {}",
                e
            )))
        })
    }

    async fn set_statement_timeout(&self, client: &deadpool_postgres::Object) -> Result<()> {
        let timeout_query = format!(
            "SET statement_timeout = {}",
            self.config.statement_timeout_seconds * 1000
        );
        client.batch_execute(&timeout_query).await.map_err(|e| {
            DocscanError::Database(format!("Failed to set statement timeout: {}", e))
        })
    }

    /// Execute a query and return rows
    pub async fn query(
        &self,
        query: &str,
        params: &[&(dyn tokio_postgres::types::ToSql + Sync)],
    ) -> Result<Vec<Row>> {
        let client = self.get_connection().await?;
        self.set_statement_timeout(&client).await?;

        client
            .query(query, params)
            .await
            .map_err(|e| StorageError::QueryFailed(e.to_string()).into())
    }

    /// Execute a statement and return the number of affected rows
    pub async fn execute(
        &self,
        statement: &str,
        params: &[&(dyn tokio_postgres::types::ToSql + Sync)],
    ) -> Result<u64> {
        let client = self.get_connection().await?;
        self.set_statement_timeout(&client).await?;

        client
            .execute(statement, params)
            .await
            .map_err(|e| DocscanError::Database(format!("Statement execution failed: {}", e)))
    }

    /// Insert rows in a single transaction
    ///
    /// Rows inserted together share one `created_at` (the transaction start
    /// time) and are ordered by their serial id.
    pub async fn insert_batch(&self, rows: &[ScanResultInsert]) -> Result<u64> {
        let mut client = self.get_connection().await?;
        self.set_statement_timeout(&client).await?;

        let insert_failed = |e: tokio_postgres::Error| StorageError::InsertFailed(e.to_string());

        let transaction = client.transaction().await.map_err(insert_failed)?;
        let statement = transaction
            .prepare_cached(INSERT_SCAN_RESULT)
            .await
            .map_err(insert_failed)?;

        let mut inserted = 0;
        for row in rows {
            inserted += transaction
                .execute(
                    &statement,
                    &[
                        &row.file_name,
                        &row.result_type,
                        &row.result_value,
                        &row.classification,
                    ],
                )
                .await
                .map_err(insert_failed)?;
        }

        transaction.commit().await.map_err(insert_failed)?;
        Ok(inserted)
    }

    /// Get the connection string (without credentials)
    pub fn connection_string_safe(&self) -> String {
        redact_connection_string(self.config.connection_string.expose_secret().as_ref())
    }

    /// Get the pool statistics
    pub fn pool_status(&self) -> deadpool_postgres::Status {
        self.pool.status()
    }
}

/// Replace the user-info part of a connection URL
fn redact_connection_string(conn: &str) -> String {
    match conn.rsplit_once('@') {
        Some((_, host)) => format!("postgresql://***@{}", host),
        None => conn
            .split_once("://")
            .map(|(_, rest)| format!("postgresql://{}", rest))
            .unwrap_or_else(|| "postgresql://***".to_string()),
    }
}

fn ssl_mode(mode: &str) -> SslMode {
    match mode {
        "disable" => SslMode::Disable,
        "require" | "verify-ca" | "verify-full" => SslMode::Require,
        _ => SslMode::Prefer,
    }
}

/// TLS connector for the configured `ssl_mode`
///
/// `require` encrypts without verifying the server certificate, `verify-ca`
/// checks the chain but not the host name, and `verify-full` checks both.
fn tls_connector(mode: &str) -> Result<Option<MakeTlsConnector>> {
    if mode == "disable" {
        return Ok(None);
    }

    let mut builder = native_tls::TlsConnector::builder();
    match mode {
        "verify-full" => {}
        "verify-ca" => {
            builder.danger_accept_invalid_hostnames(true);
        }
        _ => {
            builder.danger_accept_invalid_certs(true);
        }
    }

    let connector = builder
        .build()
        .map_err(|e| DocscanError::Configuration(format!("Failed to build TLS connector: {}", e)))?;
    Ok(Some(MakeTlsConnector::new(connector)))
}
