//! Persistence target for the configuration.
//!
//! Defines the `ConfigStore` trait so that the real JSON file and test
//! doubles can be used interchangeably by the `set` command.

use super::error::{ConfigError, ConfigResult};
use super::schema::Config;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Something the whole configuration can be written to.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore {
    /// Overwrite the stored configuration with `config`.
    fn write(&self, config: &Config) -> ConfigResult<()>;
}

/// Stores the configuration as a tab-indented JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonFileStore {
    fn write(&self, config: &Config) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let content = to_json_bytes(config)?;
        std::fs::write(&self.path, content).map_err(|e| ConfigError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        debug!("Wrote config to {}", self.path.display());
        Ok(())
    }
}

/// Serialize `config` indented with tabs, followed by a newline.
pub fn to_json_bytes(config: &Config) -> ConfigResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    config
        .serialize(&mut ser)
        .map_err(ConfigError::SerializeError)?;
    buf.push(b'\n');
    Ok(buf)
}
