//! Runtime configuration read from environment variables.
//!
//! # Responsibility
//! - Resolve log level, log directory and seeding flags for executables.
//! - Keep parsing pure so tests can supply variables without touching the
//!   process environment.
//!
//! # Invariants
//! - Values are trimmed; blank values count as unset.
//! - Unknown values for boolean flags are rejected, not defaulted.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "STOREFRONT_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "STOREFRONT_LOG_DIR";
pub const ENV_SEED: &str = "STOREFRONT_SEED";

/// Configuration parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A boolean flag held something other than a recognized literal.
    InvalidFlag { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFlag { key, value } => write!(
                f,
                "invalid value `{value}` for {key}; expected 1|true|yes|on|0|false|no|off"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Settings consumed by storefront executables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// One of `trace|debug|info|warn|error`; validated by `init_logging`.
    pub log_level: String,
    /// File logging is enabled only when a directory is configured.
    pub log_dir: Option<PathBuf>,
    /// Load the demo users and products on startup.
    pub seed_sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_sample_data: false,
        }
    }
}

impl StoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a key to its raw value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.log_dir = read(ENV_LOG_DIR).map(PathBuf::from);
        if let Some(raw) = read(ENV_SEED) {
            config.seed_sample_data = parse_flag(ENV_SEED, raw)?;
        }
        Ok(config)
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, StoreConfig, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_SEED};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> Result<StoreConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        StoreConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]).expect("defaults should load");
        assert_eq!(config, StoreConfig::default());
        assert!(config.log_dir.is_none());
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn reads_trimmed_values() {
        let config = config_from(&[
            (ENV_LOG_LEVEL, " warn "),
            (ENV_LOG_DIR, "/tmp/storefront-logs"),
            (ENV_SEED, "Yes"),
        ])
        .expect("values should parse");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/storefront-logs")));
        assert!(config.seed_sample_data);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[(ENV_LOG_DIR, "   "), (ENV_SEED, "")])
            .expect("blank values should be ignored");
        assert!(config.log_dir.is_none());
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn rejects_unknown_seed_flag() {
        let err = config_from(&[(ENV_SEED, "maybe")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                key: ENV_SEED,
                value: "maybe".to_string()
            }
        );
    }
}
