//! Shared test utilities for lisky tests.
//!
//! Provides scratch config directories and a store that always fails, so
//! persistence failures can be exercised without touching permissions.

#![allow(dead_code)]

use lisky::config::{Config, ConfigError, ConfigResult, ConfigStore, JsonFileStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary config directory plus a store pointing at `config.json` in it.
pub struct ScratchConfig {
    pub dir: TempDir,
    pub store: JsonFileStore,
}

impl ScratchConfig {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let store = JsonFileStore::new(dir.path().join("config.json"));
        Self { dir, store }
    }

    pub fn path(&self) -> PathBuf {
        self.store.path().to_path_buf()
    }

    /// Parse whatever is currently on disk.
    pub fn read(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.path()).expect("config file exists");
        serde_json::from_str(&content).expect("config file is JSON")
    }
}

/// A store whose every write fails.
#[derive(Debug, Default)]
pub struct FailingStore;

impl ConfigStore for FailingStore {
    fn write(&self, _config: &Config) -> ConfigResult<()> {
        Err(ConfigError::WriteError {
            path: PathBuf::from("/unwritable/config.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}
