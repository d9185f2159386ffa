//! The plugin vocabulary and activation-record construction.
//!
//! Optimizer plugins are configured as an ordered list of single-key
//! records, one per plugin. This module owns the fixed vocabulary of known
//! plugin names, the built-in default toggle table, the hard-coded table
//! used by the pretty-format mode, and the builders that turn a merged
//! toggle set into the record list an [`crate::Optimizer`] consumes.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Value shape a plugin accepts in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Plain on/off toggle.
    Flag,
    /// On/off toggle, or an options object carrying plugin parameters
    /// (e.g. the ID-prefixing configuration).
    FlagOrOptions,
}

/// One entry of the static plugin vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct PluginSpec {
    pub name: &'static str,
    pub shape: ValueShape,
    /// Whether the minify pipeline enables this plugin out of the box.
    pub default: bool,
}

const fn flag(name: &'static str, default: bool) -> PluginSpec {
    PluginSpec {
        name,
        shape: ValueShape::Flag,
        default,
    }
}

const fn configurable(name: &'static str, default: bool) -> PluginSpec {
    PluginSpec {
        name,
        shape: ValueShape::FlagOrOptions,
        default,
    }
}

/// Every plugin the minify pipeline knows, in pipeline order. The order is
/// load-bearing: the optimizer applies plugins sequentially and later
/// stages rely on earlier ones having run (style inlining before path
/// merging, for instance).
pub static PLUGINS: [PluginSpec; 49] = [
    flag("cleanupAttrs", true),
    flag("inlineStyles", true),
    flag("removeDoctype", true),
    flag("removeXMLProcInst", true),
    flag("removeComments", true),
    flag("removeMetadata", true),
    flag("removeTitle", true),
    flag("removeDesc", true),
    flag("removeUselessDefs", true),
    flag("removeXMLNS", true),
    flag("removeEditorsNSData", true),
    flag("removeEmptyAttrs", true),
    flag("removeHiddenElems", true),
    flag("removeEmptyText", true),
    flag("removeEmptyContainers", true),
    flag("removeViewBox", true),
    flag("cleanupEnableBackground", true),
    flag("minifyStyles", true),
    flag("convertStyleToAttrs", true),
    flag("convertColors", true),
    flag("convertPathData", true),
    flag("convertTransform", true),
    flag("removeUnknownsAndDefaults", true),
    flag("removeNonInheritableGroupAttrs", true),
    flag("removeUselessStrokeAndFill", true),
    flag("removeUnusedNS", true),
    configurable("prefixIds", true),
    flag("cleanupIDs", true),
    flag("cleanupNumericValues", true),
    flag("cleanupListOfValues", true),
    flag("moveElemsAttrsToGroup", true),
    flag("moveGroupAttrsToElems", true),
    flag("collapseGroups", true),
    flag("removeRasterImages", false),
    flag("mergePaths", true),
    flag("convertShapeToPath", true),
    flag("convertEllipseToCircle", true),
    flag("sortAttrs", false),
    flag("sortDefsChildren", true),
    flag("removeDimensions", false),
    configurable("removeAttrs", false),
    configurable("removeAttributesBySelector", false),
    configurable("removeElementsByAttr", false),
    configurable("addClassesToSVGElement", false),
    configurable("addAttributesToSVGElement", false),
    flag("removeOffCanvasPaths", false),
    flag("removeStyleElement", false),
    flag("removeScriptElement", false),
    flag("reusePaths", false),
];

/// Plugins named by the pretty-format mode, in order. All of them are
/// forced off: formatting must never destroy document content. This table
/// is deliberately independent of [`PLUGINS`] and not user-configurable.
pub static FORMAT_PLUGINS: [&str; 36] = [
    "cleanupAttrs",
    "removeDoctype",
    "removeXMLProcInst",
    "removeComments",
    "removeMetadata",
    "removeTitle",
    "removeDesc",
    "removeUselessDefs",
    "removeEditorsNSData",
    "removeEmptyAttrs",
    "removeHiddenElems",
    "removeEmptyText",
    "removeEmptyContainers",
    "removeViewBox",
    "cleanupEnableBackground",
    "convertStyleToAttrs",
    "convertColors",
    "convertPathData",
    "convertTransform",
    "removeUnknownsAndDefaults",
    "removeNonInheritableGroupAttrs",
    "removeUselessStrokeAndFill",
    "removeUnusedNS",
    "cleanupIDs",
    "cleanupNumericValues",
    "moveElemsAttrsToGroup",
    "moveGroupAttrsToElems",
    "collapseGroups",
    "removeRasterImages",
    "mergePaths",
    "convertShapeToPath",
    "sortAttrs",
    "removeDimensions",
    "removeAttrs",
    "inlineStyles",
    "minifyStyles",
];

/// Look up a vocabulary entry by name.
pub fn spec_of(name: &str) -> Option<&'static PluginSpec> {
    PLUGINS.iter().find(|spec| spec.name == name)
}

/// An ordered plugin-name -> value mapping, as consumed by
/// [`minify_records`]. Insertion order is iteration order.
pub type ToggleSet = Map<String, Value>;

/// The built-in toggle table, in vocabulary order.
pub fn default_toggles() -> ToggleSet {
    let mut toggles = Map::new();
    for spec in &PLUGINS {
        toggles.insert(spec.name.to_string(), Value::Bool(spec.default));
    }
    toggles
}

/// A plugin activation value: on/off, or on-with-options.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginValue {
    Flag(bool),
    Options(Map<String, Value>),
}

impl PluginValue {
    /// Whether this value activates the plugin. An options object always
    /// activates it, carrying plugin parameters.
    pub fn is_enabled(&self) -> bool {
        match self {
            PluginValue::Flag(on) => *on,
            PluginValue::Options(_) => true,
        }
    }
}

impl Serialize for PluginValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PluginValue::Flag(on) => serializer.serialize_bool(*on),
            PluginValue::Options(options) => options.serialize(serializer),
        }
    }
}

/// One element of the plugin pipeline: a single plugin name with its
/// activation value. Serializes as the single-key map `{"<name>": value}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationRecord {
    pub name: &'static str,
    pub value: PluginValue,
}

impl Serialize for ActivationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name, &self.value)?;
        map.end()
    }
}

/// Build the minify pipeline from an already-merged toggle set.
///
/// Emits one record per entry whose value is a boolean or an object, in
/// the set's iteration order. Entries with any other value type are
/// skipped, as are names outside the vocabulary.
pub fn minify_records(toggles: &ToggleSet) -> Vec<ActivationRecord> {
    let mut records = Vec::with_capacity(toggles.len());
    for (name, value) in toggles {
        let Some(spec) = spec_of(name) else {
            warn!(plugin = %name, "ignoring unrecognized plugin toggle");
            continue;
        };
        let value = match value {
            Value::Bool(on) => PluginValue::Flag(*on),
            Value::Object(options) => {
                if spec.shape == ValueShape::Flag {
                    debug!(plugin = %name, "options given to an on/off plugin; passing through");
                }
                PluginValue::Options(options.clone())
            }
            other => {
                warn!(plugin = %name, value = %other, "skipping toggle with unsupported value type");
                continue;
            }
        };
        records.push(ActivationRecord {
            name: spec.name,
            value,
        });
    }
    records
}

/// Build the fixed pretty-format pipeline: every destructive plugin
/// disabled, regardless of user configuration.
pub fn format_records() -> Vec<ActivationRecord> {
    FORMAT_PLUGINS
        .iter()
        .map(|&name| ActivationRecord {
            name,
            value: PluginValue::Flag(false),
        })
        .collect()
}
