//! Process configuration resolved from environment variables.
//!
//! # Responsibility
//! - Resolve log level, log directory and storage backend with defaults.
//! - Keep resolution a pure function over a key lookup so it is testable.
//!
//! # Keys
//! - `SHOPDESK_LOG_LEVEL`: `trace|debug|info|warn|error`; default by build mode.
//! - `SHOPDESK_LOG_DIR`: absolute directory; default `<tmp>/shopdesk-logs`.
//! - `SHOPDESK_DB_PATH`: SQLite file; unset or blank selects in-memory storage.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const LOG_LEVEL_KEY: &str = "SHOPDESK_LOG_LEVEL";
pub const LOG_DIR_KEY: &str = "SHOPDESK_LOG_DIR";
pub const DB_PATH_KEY: &str = "SHOPDESK_DB_PATH";

const DEFAULT_LOG_DIR_NAME: &str = "shopdesk-logs";

/// Where repositories keep their records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local lists, discarded on exit.
    Memory,
    /// SQLite database file.
    Sqlite(PathBuf),
}

/// Resolved process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: &'static str,
    pub log_dir: PathBuf,
    pub storage: StorageBackend,
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.key, self.message)
    }
}

impl Error for ConfigError {}

impl AppConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn resolve_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let log_level = match read(LOG_LEVEL_KEY) {
            Some(raw) => normalize_level(&raw).map_err(|err| ConfigError {
                key: LOG_LEVEL_KEY,
                message: err.to_string(),
            })?,
            None => default_log_level(),
        };

        let log_dir = match read(LOG_DIR_KEY) {
            Some(raw) => {
                let path = PathBuf::from(raw);
                if !path.is_absolute() {
                    return Err(ConfigError {
                        key: LOG_DIR_KEY,
                        message: format!("must be an absolute path, got `{}`", path.display()),
                    });
                }
                path
            }
            None => std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        };

        let storage = match read(DB_PATH_KEY) {
            Some(raw) => StorageBackend::Sqlite(PathBuf::from(raw)),
            None => StorageBackend::Memory,
        };

        Ok(Self {
            log_level,
            log_dir,
            storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, StorageBackend, DB_PATH_KEY, LOG_DIR_KEY, LOG_LEVEL_KEY};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn resolve(pairs: &[(&str, &str)]) -> Result<AppConfig, super::ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::resolve_with(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_select_memory_storage_and_build_level() {
        let config = resolve(&[]).unwrap();
        assert_eq!(config.log_level, default_log_level());
        assert!(config.log_dir.is_absolute());
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn explicit_values_are_normalized() {
        let log_dir = std::env::temp_dir().join("shopdesk-config-test");
        let config = resolve(&[
            (LOG_LEVEL_KEY, " WARNING "),
            (LOG_DIR_KEY, log_dir.to_str().unwrap()),
            (DB_PATH_KEY, "shop.sqlite3"),
        ])
        .unwrap();

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, log_dir);
        assert_eq!(
            config.storage,
            StorageBackend::Sqlite(PathBuf::from("shop.sqlite3"))
        );
    }

    #[test]
    fn blank_db_path_keeps_memory_storage() {
        let config = resolve(&[(DB_PATH_KEY, "   ")]).unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn invalid_values_name_the_key() {
        let level = resolve(&[(LOG_LEVEL_KEY, "loud")]).unwrap_err();
        assert_eq!(level.key, LOG_LEVEL_KEY);

        let dir = resolve(&[(LOG_DIR_KEY, "relative/logs")]).unwrap_err();
        assert_eq!(dir.key, LOG_DIR_KEY);
        assert!(dir.to_string().contains("absolute"));
    }
}
