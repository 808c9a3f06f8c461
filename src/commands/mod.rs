//! CLI commands.
//!
//! Each command takes the loaded configuration explicitly and returns a
//! serializable result for the output layer to render.

pub mod set;

pub use set::{coerce, ConfigSetter, ExecutionMode, SetResult, ERROR_PREFIX, NON_INTERACTIVE_ENV};
