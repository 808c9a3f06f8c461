//! Lisky Library
//!
//! Core functionality of the lisky command line interface: configuration
//! loading and persistence, the commands that change it, and result output.
//!
//! # Modules
//!
//! - `config`: JSON configuration tree, variable registry, loader and store
//! - `commands`: CLI commands (`set`)
//! - `output`: Text / JSON rendering of command results
//! - `logging`: tracing subscriber setup

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;

// Re-export commonly used types for convenience
pub use commands::{ConfigSetter, ExecutionMode, SetResult};
pub use config::{Config, ConfigError, ConfigLoader, ConfigResult, ConfigStore, ConfigVariable};
pub use output::OutputFormat;
