//! The user-editable settings surface.
//!
//! Hosts hand over their settings document as JSON; the plugin toggle map
//! lives under the fixed [`MINIFY_KEY`]. Merging with the built-in default
//! table happens here, so the builder in [`crate::plugins`] always sees an
//! already-merged set.

use serde_json::{Map, Value};
use tracing::warn;

use crate::plugins::{self, ToggleSet};

/// Settings key holding the minify plugin toggles.
pub const MINIFY_KEY: &str = "svg.minify";

/// A host settings document, read-only at command-invocation time.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    /// Settings with nothing configured; every lookup falls back to the
    /// built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a parsed settings document. Anything but a JSON object is
    /// treated as empty.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { values },
            Value::Null => Self::default(),
            other => {
                warn!(found = %other, "settings document is not an object; using defaults");
                Self::default()
            }
        }
    }

    /// Parse a JSON settings document.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_value(serde_json::from_str(text)?))
    }

    /// The minify toggle set: built-in defaults overlaid with the object
    /// under [`MINIFY_KEY`]. Overrides replace values in place and never
    /// reorder, so every default-table key stays present and the set keeps
    /// vocabulary order. Names outside the vocabulary are dropped.
    pub fn minify_toggles(&self) -> ToggleSet {
        let mut toggles = plugins::default_toggles();
        let Some(overrides) = self.values.get(MINIFY_KEY).and_then(Value::as_object) else {
            return toggles;
        };
        for (name, value) in overrides {
            if !toggles.contains_key(name) {
                warn!(plugin = %name, "dropping unknown plugin from settings");
                continue;
            }
            toggles.insert(name.clone(), value.clone());
        }
        toggles
    }
}
