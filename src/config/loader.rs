//! Configuration loader with directory resolution and first-run defaults.

use super::error::{ConfigError, ConfigResult};
use super::schema::Config;
use super::store::{ConfigStore, JsonFileStore};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Config file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Directory created under the home directory
const CONFIG_DIR_NAME: &str = ".lisky";

/// Environment variable for an explicit config directory
const CONFIG_DIR_ENV: &str = "LISKY_CONFIG_DIR";

/// Loaded configuration together with the store it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Where the configuration is persisted
    pub store: JsonFileStore,
    /// The loaded configuration
    pub config: Config,
}

impl ConfigLoader {
    /// Load configuration from the resolved config file.
    ///
    /// Resolution: `LISKY_CONFIG_DIR` if set, otherwise `~/.lisky`.
    /// A missing file is replaced by the defaults, which are written out on
    /// a best-effort basis.
    pub fn load() -> ConfigResult<Self> {
        let path = resolve_config_path()?;
        Self::load_from(path)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let store = JsonFileStore::new(path.as_ref());

        let config = if path.as_ref().exists() {
            load_from_file(path.as_ref())?
        } else {
            let config = Config::default();
            match store.write(&config) {
                Ok(()) => debug!("Created default config at {}", store.path().display()),
                Err(e) => warn!("Could not write default config: {}", e),
            }
            config
        };

        Ok(Self { store, config })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the config file.
    pub fn config_path(&self) -> &Path {
        self.store.path()
    }

    /// Split into the configuration and its store.
    pub fn into_parts(self) -> (Config, JsonFileStore) {
        (self.config, self.store)
    }
}

/// Resolve the config directory.
pub fn resolve_config_dir() -> ConfigResult<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(CONFIG_DIR_NAME))
        .ok_or(ConfigError::MissingHome)
}

/// Resolve the config file path.
pub fn resolve_config_path() -> ConfigResult<PathBuf> {
    resolve_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from a file.
fn load_from_file(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    match serde_json::from_str::<Value>(&content).map_err(ConfigError::ParseError)? {
        Value::Object(root) => Ok(Config::from_map(root)),
        _ => Err(ConfigError::InvalidRoot(path.to_path_buf())),
    }
}
