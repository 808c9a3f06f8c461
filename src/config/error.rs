//! Configuration error types for the config module.

use std::path::PathBuf;
use thiserror::Error;

/// Warning attached to a result (or raised) when the config file cannot be written.
pub const WRITE_FAIL_WARNING: &str =
    "Config file could not be written: your changes will not be persisted.";

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Caller supplied an unsupported variable or a malformed value
    #[error("{0}")]
    Validation(String),

    /// Persistence failed while running unattended
    #[error("{0}")]
    FileSystem(String),

    /// Failed to read config file
    #[error("Failed to read configuration file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON
    #[error("Config file is not valid JSON: {0}")]
    ParseError(#[source] serde_json::Error),

    /// Config file parsed but its root is not an object
    #[error("Config file '{0}' must contain a JSON object")]
    InvalidRoot(PathBuf),

    /// Failed to serialize config
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[source] serde_json::Error),

    /// Failed to write config file
    #[error("Failed to write configuration file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No home directory to place the config directory in
    #[error("Could not determine the home directory; set LISKY_CONFIG_DIR")]
    MissingHome,
}

impl ConfigError {
    /// Create a validation error
    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self::Validation(message.into())
    }

    /// Create a file system error carrying the standard write-failure text
    pub fn write_failed() -> Self {
        Self::FileSystem(WRITE_FAIL_WARNING.to_string())
    }

    /// Whether this error was caused by caller input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
