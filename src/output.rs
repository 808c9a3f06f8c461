//! Rendering of command results.
//!
//! The `json` and `pretty` configuration variables decide how results are
//! printed: plain text by default, JSON when `json` is set.

use crate::commands::SetResult;
use crate::config::Config;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    PrettyJson,
}

impl OutputFormat {
    /// Pick the format the configuration asks for.
    pub fn from_config(config: &Config) -> Self {
        match (config.json_output(), config.pretty_output()) {
            (false, _) => Self::Text,
            (true, false) => Self::Json,
            (true, true) => Self::PrettyJson,
        }
    }
}

/// Rendered result, split by the stream it belongs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub stdout: String,
    pub stderr: Option<String>,
}

/// Render a `set` result.
///
/// JSON formats carry the warning inside the object; text puts it on stderr.
pub fn render(result: &SetResult, format: OutputFormat) -> serde_json::Result<Rendered> {
    let rendered = match format {
        OutputFormat::Text => Rendered {
            stdout: result.message.clone(),
            stderr: result.warning.as_ref().map(|w| format!("Warning: {w}")),
        },
        OutputFormat::Json => Rendered {
            stdout: serde_json::to_string(result)?,
            stderr: None,
        },
        OutputFormat::PrettyJson => Rendered {
            stdout: serde_json::to_string_pretty(result)?,
            stderr: None,
        },
    };
    Ok(rendered)
}
