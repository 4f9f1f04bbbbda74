//! Storage adapters for Docscan.
//!
//! - [`database`] - Storage abstraction layer (trait-based)
//! - [`postgresql`] - PostgreSQL implementation
//! - [`memory`] - In-process implementation
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate the database driver
//! from the scanning pipeline. The pipeline only sees
//! [`FindingStore`](database::FindingStore).
//!
//! ```rust,no_run
//! use docscan::adapters::database::create_finding_store;
//! use docscan::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("docscan.toml")?;
//! let store = create_finding_store(&config).await?;
//! store.ensure_schema().await?;
//! println!("{} results stored", store.all_results().await?.len());
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod memory;
pub mod postgresql;
