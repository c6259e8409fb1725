//! Root configuration document and file loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::schemas::SchemasConfig;

/// Top-level daemon configuration.
///
/// Every section is optional in the source file. [`Config::normalize`]
/// runs once after deserialization and fills unset values, so
/// consumers only ever see a fully populated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Schema definition locations and refresh interval.
    #[serde(default)]
    pub schemas: SchemasConfig,
}

impl Config {
    /// Load configuration from a TOML file and normalize it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise return normalized defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            let mut config = Config::default();
            config.normalize()?;
            Ok(config)
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Normalize every section in place.
    ///
    /// Must run exactly once, at startup, before the configuration is
    /// handed to any consumer. Idempotent.
    pub fn normalize(&mut self) -> Result<()> {
        self.schemas.normalize()?;
        Ok(())
    }
}
