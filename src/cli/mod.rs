//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Docscan using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Docscan - Sensitive Data Scanner
#[derive(Parser, Debug)]
#[command(name = "docscan")]
#[command(version, about, long_about = None)]
#[command(author = "Docscan Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "docscan.toml", env = "DOCSCAN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DOCSCAN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan documents for sensitive data and store the findings
    Scan(commands::scan::ScanArgs),

    /// List stored scan results
    Results(commands::results::ResultsArgs),

    /// Delete stored scan results for a document
    Delete(commands::delete::DeleteArgs),

    /// Validate configuration file and check the store connection
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
