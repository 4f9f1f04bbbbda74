//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{DatabaseTarget, DocscanConfig, PostgreSQLConfig};
use super::secret::secret_string;
use crate::domain::errors::DocscanError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DocscanConfig
/// 4. Applies environment variable overrides (DOCSCAN_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use docscan::config::loader::load_config;
///
/// let config = load_config("docscan.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DocscanConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DocscanError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DocscanError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from TOML text
///
/// Applies the same substitution, overrides, and validation as
/// [`load_config`].
pub fn load_config_from_str(contents: &str) -> Result<DocscanConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: DocscanConfig = toml::from_str(&contents)
        .map_err(|e| DocscanError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        DocscanError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| DocscanError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DocscanError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the DOCSCAN_* prefix
///
/// Environment variables follow the pattern: DOCSCAN_<SECTION>_<KEY>
/// For example: DOCSCAN_SCAN_MAX_INPUT_BYTES, DOCSCAN_POSTGRESQL_CONNECTION_STRING
fn apply_env_overrides(config: &mut DocscanConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("DOCSCAN_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("DOCSCAN_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_env("DOCSCAN_APPLICATION_DRY_RUN", &val)?;
    }

    // Scan overrides
    if let Ok(val) = std::env::var("DOCSCAN_SCAN_MAX_INPUT_BYTES") {
        config.scan.max_input_bytes = parse_env("DOCSCAN_SCAN_MAX_INPUT_BYTES", &val)?;
    }
    if let Ok(val) = std::env::var("DOCSCAN_SCAN_MAX_CONCURRENT_DOCUMENTS") {
        config.scan.max_concurrent_documents =
            parse_env("DOCSCAN_SCAN_MAX_CONCURRENT_DOCUMENTS", &val)?;
    }

    // Extraction overrides
    if let Ok(val) = std::env::var("DOCSCAN_EXTRACTION_MAX_FILE_SIZE_MB") {
        config.extraction.max_file_size_mb =
            parse_env("DOCSCAN_EXTRACTION_MAX_FILE_SIZE_MB", &val)?;
    }
    if let Ok(val) = std::env::var("DOCSCAN_EXTRACTION_ALLOWED_EXTENSIONS") {
        config.extraction.allowed_extensions = val
            .split(',')
            .map(|ext| ext.trim().to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
    }

    // Storage target
    if let Ok(val) = std::env::var("DOCSCAN_DATABASE_TARGET") {
        config.database_target = match val.to_lowercase().as_str() {
            "postgresql" => DatabaseTarget::PostgreSQL,
            "memory" => DatabaseTarget::Memory,
            other => {
                return Err(DocscanError::Configuration(format!(
                    "Invalid DOCSCAN_DATABASE_TARGET '{other}'. Must be one of: postgresql, memory"
                )))
            }
        };
    }

    // PostgreSQL overrides; a connection string alone is enough to create the section
    if let Ok(val) = std::env::var("DOCSCAN_POSTGRESQL_CONNECTION_STRING") {
        match config.postgresql {
            Some(ref mut pg) => pg.connection_string = secret_string(val),
            None => {
                config.postgresql = Some(PostgreSQLConfig::with_connection_string(secret_string(
                    val,
                )))
            }
        }
    }
    if let Some(ref mut pg) = config.postgresql {
        if let Ok(val) = std::env::var("DOCSCAN_POSTGRESQL_MAX_CONNECTIONS") {
            pg.max_connections = parse_env("DOCSCAN_POSTGRESQL_MAX_CONNECTIONS", &val)?;
        }
        if let Ok(val) = std::env::var("DOCSCAN_POSTGRESQL_SSL_MODE") {
            pg.ssl_mode = val;
        }
    }

    // Audit overrides
    if let Ok(val) = std::env::var("DOCSCAN_AUDIT_ENABLED") {
        config.audit.enabled = parse_env("DOCSCAN_AUDIT_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("DOCSCAN_AUDIT_LOG_PATH") {
        config.audit.log_path = val.into();
    }

    // Logging overrides
    if let Ok(val) = std::env::var("DOCSCAN_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env("DOCSCAN_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("DOCSCAN_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("DOCSCAN_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
    if let Ok(val) = std::env::var("DOCSCAN_LOGGING_LOCAL_MAX_FILES") {
        config.logging.local_max_files = parse_env("DOCSCAN_LOGGING_LOCAL_MAX_FILES", &val)?;
    }

    Ok(())
}

/// Parse a typed override, naming the variable when the value is rejected
fn parse_env<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        DocscanError::Configuration(format!("Invalid value for {name}: '{value}' ({e})"))
    })
}
