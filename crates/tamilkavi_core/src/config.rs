//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - `log_level` is always one of `trace|debug|info|warn|error`.
//! - `log_dir`, when set, is absolute.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir, LoggingError};
use std::error::Error;
use std::ffi::{OsStr, OsString};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DATA_DIR: &str = "TAMILKAVI_DATA_DIR";
pub const ENV_LOG_LEVEL: &str = "TAMILKAVI_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TAMILKAVI_LOG_DIR";

/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "kavisrc";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KaviConfig {
    /// Directory holding one `*.json` author record per file.
    pub data_dir: PathBuf,
    pub log_level: &'static str,
    /// File logging is enabled only when this is set.
    pub log_dir: Option<PathBuf>,
}

impl Default for KaviConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl KaviConfig {
    /// Reads `TAMILKAVI_*` variables from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::resolve(|key| std::env::var_os(key))
    }

    /// Resolves configuration from an arbitrary key lookup.
    ///
    /// Directory values may be any OS string; the log level must be UTF-8.
    ///
    /// # Errors
    /// - `InvalidValue` for an unsupported or non-UTF-8 log level, or a
    ///   relative log dir.
    pub fn resolve(lookup: impl Fn(&str) -> Option<OsString>) -> ConfigResult<Self> {
        let value = |key: &str| lookup(key).map(trimmed).filter(|raw| !raw.is_empty());

        let mut config = Self::default();
        if let Some(dir) = value(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            let level = level.to_str().ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL,
                message: "value is not valid UTF-8".to_string(),
            })?;
            config.log_level = normalize_level(level).map_err(|err| invalid(ENV_LOG_LEVEL, err))?;
        }
        if let Some(dir) = value(ENV_LOG_DIR) {
            let dir = normalize_log_dir(&PathBuf::from(dir))
                .map_err(|err| invalid(ENV_LOG_DIR, err))?;
            config.log_dir = Some(dir);
        }
        Ok(config)
    }

    /// Overrides the data directory, e.g. from a command-line flag.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}

fn trimmed(raw: OsString) -> OsString {
    match raw.to_str() {
        Some(text) => OsStr::new(text.trim()).to_os_string(),
        None => raw,
    }
}

fn invalid(key: &'static str, err: LoggingError) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        message: err.to_string(),
    }
}
