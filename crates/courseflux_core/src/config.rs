//! Runtime configuration for programs embedding the core.
//!
//! # Responsibility
//! - Hold the mock DB location and logging settings.
//! - Layer defaults, environment variables and explicit overrides.
//!
//! # Invariants
//! - A validated config always carries a supported log level.
//! - `log_dir`, when set, is absolute.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "COURSEFLUX_DB";
pub const LOG_LEVEL_ENV: &str = "COURSEFLUX_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "COURSEFLUX_LOG_DIR";

const DEFAULT_DB_PATH: &str = "db.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    InvalidLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "invalid log level: {message}"),
            Self::InvalidLogDir(message) => write!(f, "invalid log dir: {message}"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON document used by the mocked API.
    pub db_path: PathBuf,
    pub log_level: String,
    /// Rolling log directory; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `COURSEFLUX_*` variables from the process env.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(db_path) = non_blank(lookup(DB_PATH_ENV)) {
            config.db_path = PathBuf::from(db_path);
        }
        if let Some(level) = non_blank(lookup(LOG_LEVEL_ENV)) {
            config.log_level = level;
        }
        if let Some(dir) = non_blank(lookup(LOG_DIR_ENV)) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        config
    }

    /// Normalizes the level and checks the log dir.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.log_level = normalize_level(&self.log_level)
            .map_err(ConfigError::InvalidLogLevel)?
            .to_string();
        if let Some(dir) = self.log_dir.take() {
            let normalized =
                normalize_log_dir(&dir.to_string_lossy()).map_err(ConfigError::InvalidLogDir)?;
            self.log_dir = Some(normalized);
        }
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::path::PathBuf;

    #[test]
    fn lookup_overrides_defaults_and_ignores_blank_values() {
        let config = AppConfig::from_lookup(|key| match key {
            DB_PATH_ENV => Some("/tmp/courses.json".to_string()),
            LOG_LEVEL_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.db_path, PathBuf::from("/tmp/courses.json"));
        assert_eq!(config.log_level, AppConfig::default().log_level);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn validate_normalizes_level_and_rejects_relative_dir() {
        let config = AppConfig {
            log_level: "WARNING".to_string(),
            ..AppConfig::default()
        }
        .validate()
        .expect("config should validate");
        assert_eq!(config.log_level, "warn");

        let err = AppConfig::from_lookup(|key| (key == LOG_DIR_ENV).then(|| "logs".to_string()))
            .validate()
            .expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::InvalidLogDir(_)));

        let err = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        }
        .validate()
        .expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    }
}
