//! The `set` command: change one configuration variable and persist it.

use crate::config::{
    Config, ConfigError, ConfigResult, ConfigStore, ConfigVariable, ValueKind, WRITE_FAIL_WARNING,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Environment flag marking an unattended run.
pub const NON_INTERACTIVE_ENV: &str = "NON_INTERACTIVE_MODE";

/// Prefix shown before any error from this command.
pub const ERROR_PREFIX: &str = "Could not set config variable";

/// Outcome of a successful `set`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetResult {
    pub message: String,
    /// Present when the change was applied but could not be saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Whether a human is around to read warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Interactive,
    /// Write failures abort the command
    NonInteractive,
}

impl ExecutionMode {
    /// Read the mode from `NON_INTERACTIVE_MODE`; only the literal `true` counts.
    pub fn from_env() -> Self {
        match std::env::var(NON_INTERACTIVE_ENV) {
            Ok(v) if v == "true" => Self::NonInteractive,
            _ => Self::Interactive,
        }
    }
}

/// Applies `set` requests to a configuration and writes it to a store.
#[derive(Debug)]
pub struct ConfigSetter<S> {
    store: S,
    /// Fixed mode; `None` consults the environment when a write fails
    mode: Option<ExecutionMode>,
}

impl<S: ConfigStore> ConfigSetter<S> {
    pub fn new(store: S) -> Self {
        Self { store, mode: None }
    }

    /// Use `mode` instead of reading the environment.
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set `variable` to `value` in `config` and persist the whole configuration.
    ///
    /// Validation happens before `config` is touched. Once validated, the
    /// change stays applied in memory even if persisting it fails.
    pub fn set(&self, config: &mut Config, variable: &str, value: &str) -> ConfigResult<SetResult> {
        let variable: ConfigVariable = variable.parse()?;
        let leaf = coerce(variable.kind(), value)?;

        debug!("Setting {} ({:?}) to {}", variable, variable.kind(), leaf);
        config.set(variable.path(), leaf);

        let written = match self.store.write(config) {
            Ok(()) => true,
            Err(e) => {
                warn!("Config write failed: {}", e);
                false
            }
        };

        if !written && self.mode() == ExecutionMode::NonInteractive {
            return Err(ConfigError::write_failed());
        }

        let result = SetResult {
            message: format!("Successfully set {} to {}.", variable.dotted_path(), value),
            warning: (!written).then(|| WRITE_FAIL_WARNING.to_string()),
        };
        info!("{}", result.message);
        Ok(result)
    }

    fn mode(&self) -> ExecutionMode {
        self.mode.unwrap_or_else(ExecutionMode::from_env)
    }
}

/// Turn the raw command-line value into the leaf stored for `kind`.
pub fn coerce(kind: ValueKind, raw: &str) -> ConfigResult<Value> {
    match kind {
        ValueKind::Boolean => match raw {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(ConfigError::validation("Value must be a boolean.")),
        },
        ValueKind::String => Ok(Value::String(raw.to_string())),
    }
}
