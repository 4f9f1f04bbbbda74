//! Storage abstraction layer
//!
//! A trait-based abstraction over findings stores, allowing Docscan to run
//! against PostgreSQL or an in-process memory store.

pub mod factory;
pub mod traits;

pub use factory::create_finding_store;
pub use traits::FindingStore;
