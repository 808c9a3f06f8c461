//! Configuration module for lisky.
//!
//! The configuration is a JSON file holding a small tree of settings. Only
//! the variables listed in [`ConfigVariable`] can be changed through the
//! `set` command, but any other fields present in the file are kept.
//!
//! # Configuration Resolution
//!
//! 1. `LISKY_CONFIG_DIR` environment variable (explicit directory)
//! 2. `~/.lisky/config.json`
//!
//! When no file exists yet, the defaults are used and written out.
//!
//! # Example
//!
//! ```rust,ignore
//! use lisky::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load()?;
//! println!("JSON output: {}", loader.config().json_output());
//! ```

mod error;
mod loader;
mod schema;
mod store;
mod variable;

pub use error::{ConfigError, ConfigResult, WRITE_FAIL_WARNING};
pub use loader::{resolve_config_dir, resolve_config_path, ConfigLoader};
pub use schema::Config;
pub use store::{to_json_bytes, ConfigStore, JsonFileStore};
pub use variable::{ConfigVariable, ValueKind};

#[cfg(test)]
pub use store::MockConfigStore;
