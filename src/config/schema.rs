//! Configuration tree.
//!
//! The configuration is kept as a JSON object rather than a fixed struct so
//! that fields lisky does not know about survive a rewrite untouched.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Root configuration object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    root: Map<String, Value>,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = json!({
            "name": "lisky",
            "json": false,
            "pretty": false,
            "liskJS": {
                "testnet": false,
                "node": "",
                "port": "",
                "ssl": false
            }
        });
        match defaults {
            Value::Object(root) => Self { root },
            _ => Self::empty(),
        }
    }
}

impl Config {
    /// A configuration with no fields at all.
    pub fn empty() -> Self {
        Self { root: Map::new() }
    }

    /// Wrap an existing JSON object.
    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Look up the value at `path`, if every component exists.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let (last, parents) = path.split_last()?;
        let mut node = &self.root;
        for key in parents {
            node = node.get(*key)?.as_object()?;
        }
        node.get(*last)
    }

    /// Boolean at `path`, `false` when missing or not a boolean.
    pub fn flag(&self, path: &[&str]) -> bool {
        self.get(path).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Store `value` at `path`, creating intermediate objects as needed.
    ///
    /// An intermediate component holding a non-object value is replaced by an
    /// empty object. An empty path leaves the tree untouched.
    pub fn set(&mut self, path: &[&str], value: Value) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let mut node = &mut self.root;
        for key in parents {
            let child = node
                .entry((*key).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            let Value::Object(map) = child else {
                return;
            };
            node = map;
        }
        node.insert((*last).to_string(), value);
    }

    /// Whether the output of commands should be JSON.
    pub fn json_output(&self) -> bool {
        self.flag(&["json"])
    }

    /// Whether JSON output should be pretty-printed.
    pub fn pretty_output(&self) -> bool {
        self.flag(&["pretty"])
    }
}
