//! Helios configuration layer.
//!
//! The daemon loads its configuration from a TOML file at startup and
//! normalizes it exactly once before any consumer sees it: fields left
//! unset by the operator take fixed defaults, so downstream code can
//! rely on non-empty schema paths and a positive refresh interval.
//!
//! # Core Concepts
//!
//! - **Schema path**: a filesystem or resource path under which
//!   definition files for one schema category (panels, queries, or
//!   datasources) live.
//! - **Refresh interval**: how often the schema loader re-reads
//!   definitions from the configured paths.
//! - **Normalization**: replacing unset field values with fixed
//!   defaults to produce a fully valid configuration.

pub mod config;
pub mod error;
pub mod schemas;

// Re-exports for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use schemas::SchemasConfig;
