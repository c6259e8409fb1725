//! Schema definition locations and refresh interval.
//!
//! The schema loader reads panel, query, and datasource definitions
//! from the paths configured here and re-reads them on `interval`.
//! A freshly deserialized [`SchemasConfig`] may have any subset of its
//! fields unset; call [`SchemasConfig::normalize`] once before handing
//! the structure to any consumer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default location of panel schema definitions.
pub const DEFAULT_PANELS_PATH: &str = "schemas/panels";

/// Default location of query schema definitions.
pub const DEFAULT_QUERIES_PATH: &str = "schemas/queries";

/// Default location of datasource schema definitions.
pub const DEFAULT_DATASOURCES_PATH: &str = "schemas/datasources";

/// Default schema refresh interval: 1 hour.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Where schema definitions live and how often to reload them.
///
/// Every key is optional in the source document. Missing keys
/// deserialize to the type's zero value (empty string, zero duration);
/// [`normalize`](Self::normalize) then fills the defaults. The raw
/// form carries no guarantees, the normalized form always does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemasConfig {
    /// Path to panel schema definitions.
    #[serde(default)]
    pub panels_path: String,

    /// Path to query schema definitions.
    #[serde(default)]
    pub queries_path: String,

    /// Path to datasource schema definitions.
    #[serde(default)]
    pub datasources_path: String,

    /// Refresh period for schema definitions ("1h", "90m", "30s").
    #[serde(default, with = "duration")]
    pub interval: Duration,
}

impl SchemasConfig {
    /// Fill unset fields with their defaults.
    ///
    /// Each substitution is independent: an empty path becomes its
    /// fixed default and a zero interval becomes [`DEFAULT_INTERVAL`],
    /// regardless of what the other fields hold. Values that are
    /// already set are never overwritten, so repeated calls are
    /// no-ops.
    ///
    /// # Errors
    ///
    /// None today. The `Result` keeps the calling convention stable
    /// for future validation rules; callers must still check it.
    pub fn normalize(&mut self) -> Result<()> {
        if self.panels_path.is_empty() {
            self.panels_path = DEFAULT_PANELS_PATH.to_string();
        }
        if self.queries_path.is_empty() {
            self.queries_path = DEFAULT_QUERIES_PATH.to_string();
        }
        if self.datasources_path.is_empty() {
            self.datasources_path = DEFAULT_DATASOURCES_PATH.to_string();
        }
        if self.interval.is_zero() {
            self.interval = DEFAULT_INTERVAL;
        }
        Ok(())
    }
}

/// Duration (de)serialization in humantime form ("1h", "90m").
mod duration {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_fills_all_defaults() {
        let mut schemas = SchemasConfig::default();
        schemas.normalize().unwrap();

        assert_eq!(schemas.panels_path, DEFAULT_PANELS_PATH);
        assert_eq!(schemas.queries_path, DEFAULT_QUERIES_PATH);
        assert_eq!(schemas.datasources_path, DEFAULT_DATASOURCES_PATH);
        assert_eq!(schemas.interval, DEFAULT_INTERVAL);
    }

    #[test]
    fn normalize_keeps_explicit_values() {
        let mut schemas = SchemasConfig {
            panels_path: "a".to_string(),
            queries_path: "b".to_string(),
            datasources_path: "c".to_string(),
            interval: Duration::from_secs(30),
        };
        let expected = schemas.clone();
        schemas.normalize().unwrap();
        assert_eq!(schemas, expected);
    }

    #[test]
    fn substitution_is_per_field() {
        // A custom panels path must not influence the other defaults.
        let mut schemas = SchemasConfig {
            panels_path: "/custom/panels".to_string(),
            ..Default::default()
        };
        schemas.normalize().unwrap();

        assert_eq!(schemas.panels_path, "/custom/panels");
        assert_eq!(schemas.queries_path, DEFAULT_QUERIES_PATH);
        assert_eq!(schemas.datasources_path, DEFAULT_DATASOURCES_PATH);
        assert_eq!(schemas.interval, DEFAULT_INTERVAL);
    }

    #[test]
    fn zero_interval_becomes_one_hour() {
        let mut schemas = SchemasConfig {
            interval: Duration::ZERO,
            ..Default::default()
        };
        schemas.normalize().unwrap();
        assert_eq!(schemas.interval, Duration::from_secs(3600));
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut once = SchemasConfig {
            queries_path: "/q".to_string(),
            ..Default::default()
        };
        once.normalize().unwrap();

        let mut twice = once.clone();
        twice.normalize().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_keys_deserialize_to_zero_values() {
        let schemas: SchemasConfig = toml::from_str("").unwrap();
        assert!(schemas.panels_path.is_empty());
        assert!(schemas.queries_path.is_empty());
        assert!(schemas.datasources_path.is_empty());
        assert!(schemas.interval.is_zero());
    }

    #[test]
    fn interval_parses_humantime_strings() {
        let schemas: SchemasConfig = toml::from_str(r#"interval = "90m""#).unwrap();
        assert_eq!(schemas.interval, Duration::from_secs(90 * 60));
    }

    #[test]
    fn interval_survives_toml_round_trip() {
        let mut schemas = SchemasConfig::default();
        schemas.normalize().unwrap();

        let toml_str = toml::to_string_pretty(&schemas).unwrap();
        let parsed: SchemasConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, schemas);
    }

    #[test]
    fn section_is_format_agnostic() {
        // The same section deserializes from JSON documents.
        let schemas: SchemasConfig = serde_json::from_str(
            r#"{"panels_path": "/srv/panels", "interval": "30s"}"#,
        )
        .unwrap();
        assert_eq!(schemas.panels_path, "/srv/panels");
        assert_eq!(schemas.interval, Duration::from_secs(30));
    }
}
