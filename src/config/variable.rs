//! Registry of the configuration variables `set` accepts.

use super::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Kind of leaf value a variable holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Only the literals `true` and `false` are accepted
    Boolean,
    /// Any string, stored verbatim
    String,
}

/// A supported configuration variable.
///
/// Each variant knows the path of the leaf it targets inside the
/// configuration tree and the kind of value stored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigVariable {
    Json,
    Name,
    Pretty,
    LiskJsTestnet,
    LiskJsSsl,
    LiskJsNode,
    LiskJsPort,
}

impl ConfigVariable {
    /// Every supported variable, in the order they are advertised.
    pub const ALL: [ConfigVariable; 7] = [
        ConfigVariable::Json,
        ConfigVariable::Name,
        ConfigVariable::Pretty,
        ConfigVariable::LiskJsTestnet,
        ConfigVariable::LiskJsSsl,
        ConfigVariable::LiskJsNode,
        ConfigVariable::LiskJsPort,
    ];

    /// The name users type on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Name => "name",
            Self::Pretty => "pretty",
            Self::LiskJsTestnet => "liskJS.testnet",
            Self::LiskJsSsl => "liskJS.ssl",
            Self::LiskJsNode => "liskJS.node",
            Self::LiskJsPort => "liskJS.port",
        }
    }

    /// Keys leading to the leaf inside the configuration tree.
    pub fn path(self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Name => &["name"],
            Self::Pretty => &["pretty"],
            Self::LiskJsTestnet => &["liskJS", "testnet"],
            Self::LiskJsSsl => &["liskJS", "ssl"],
            Self::LiskJsNode => &["liskJS", "node"],
            Self::LiskJsPort => &["liskJS", "port"],
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            Self::Json | Self::Pretty | Self::LiskJsTestnet | Self::LiskJsSsl => ValueKind::Boolean,
            Self::Name | Self::LiskJsNode | Self::LiskJsPort => ValueKind::String,
        }
    }

    /// Path components joined with `.`, as shown in result messages.
    pub fn dotted_path(self) -> String {
        self.path().join(".")
    }

    /// Names of all supported variables, for help text and completion.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(ConfigVariable::name)
    }
}

impl fmt::Display for ConfigVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigVariable {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| ConfigError::validation("Unsupported variable name."))
    }
}
