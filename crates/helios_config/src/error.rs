//! Error types for the configuration layer.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors produced while loading or normalizing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing a configuration file failed.
    #[error("config file I/O: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),

    /// A configuration value is invalid.
    ///
    /// Normalization currently cannot fail; this variant exists so
    /// validation rules can be added without changing the calling
    /// convention.
    #[error("invalid config: {0}")]
    Invalid(String),
}
