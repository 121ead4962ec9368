//! Connection settings.
//!
//! # Invariants
//! - A blank or unset path selects an in-memory database.
//! - Malformed environment values are reported, never silently replaced.

use super::{DbError, DbResult};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the database file path.
pub const DB_PATH_ENV: &str = "DOGRECORD_DB_PATH";
/// Environment variable overriding the busy timeout, in milliseconds.
pub const DB_BUSY_TIMEOUT_ENV: &str = "DOGRECORD_BUSY_TIMEOUT_MS";

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    Memory,
}

/// Settings used by `open_db_with_config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub location: DbLocation,
    /// How long SQLite waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            location: DbLocation::Memory,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}

impl DbConfig {
    /// File-backed config with default timeout.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: DbLocation::File(path.into()),
            ..Self::default()
        }
    }

    /// Reads `DOGRECORD_DB_PATH` and `DOGRECORD_BUSY_TIMEOUT_MS`.
    ///
    /// # Errors
    /// - Returns `DbError::InvalidConfig` when the timeout is not an integer.
    pub fn from_env() -> DbResult<Self> {
        Self::from_values(
            std::env::var(DB_PATH_ENV).ok().as_deref(),
            std::env::var(DB_BUSY_TIMEOUT_ENV).ok().as_deref(),
        )
    }

    fn from_values(path: Option<&str>, busy_timeout_ms: Option<&str>) -> DbResult<Self> {
        let location = match path.map(str::trim) {
            Some(value) if !value.is_empty() => DbLocation::File(PathBuf::from(value)),
            _ => DbLocation::Memory,
        };

        let busy_timeout = match busy_timeout_ms.map(str::trim) {
            Some(value) if !value.is_empty() => {
                let millis = value.parse::<u64>().map_err(|_| {
                    DbError::InvalidConfig(format!(
                        "{DB_BUSY_TIMEOUT_ENV} must be a non-negative integer, got `{value}`"
                    ))
                })?;
                Duration::from_millis(millis)
            }
            _ => DEFAULT_BUSY_TIMEOUT,
        };

        Ok(Self {
            location,
            busy_timeout,
        })
    }

    pub(crate) fn mode(&self) -> &'static str {
        match self.location {
            DbLocation::File(_) => "file",
            DbLocation::Memory => "memory",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DbConfig, DbLocation};
    use crate::db::DbError;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn missing_values_fall_back_to_memory_defaults() {
        let config = DbConfig::from_values(None, None).unwrap();
        assert_eq!(config, DbConfig::default());
    }

    #[test]
    fn blank_path_means_memory() {
        let config = DbConfig::from_values(Some("   "), Some("")).unwrap();
        assert_eq!(config.location, DbLocation::Memory);
    }

    #[test]
    fn path_and_timeout_are_parsed() {
        let config = DbConfig::from_values(Some(" /tmp/dogs.db "), Some("250")).unwrap();
        assert_eq!(config.location, DbLocation::File(PathBuf::from("/tmp/dogs.db")));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
        assert_eq!(config.mode(), "file");
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = DbConfig::from_values(None, Some("soon")).unwrap_err();
        assert!(matches!(err, DbError::InvalidConfig(message) if message.contains("soon")));
    }
}
