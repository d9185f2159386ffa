//! Plugin table and builder properties.

use serde_json::{Map, Value, json};

use svgmin::Settings;
use svgmin::plugins::{
    ActivationRecord, FORMAT_PLUGINS, PLUGINS, PluginValue, default_toggles, format_records,
    minify_records,
};

#[test]
fn vocabulary_has_the_full_table() {
    assert_eq!(PLUGINS.len(), 49);
    assert_eq!(default_toggles().len(), PLUGINS.len());
}

#[test]
fn well_typed_input_maps_one_record_per_key() {
    let mut toggles = Map::new();
    toggles.insert("removeComments".into(), Value::Bool(true));
    toggles.insert("mergePaths".into(), Value::Bool(false));
    toggles.insert("prefixIds".into(), json!({"prefix": "icon"}));

    let records = minify_records(&toggles);
    assert_eq!(records.len(), toggles.len());
    let names: Vec<&str> = records.iter().map(|r| r.name).collect();
    assert_eq!(names, ["removeComments", "mergePaths", "prefixIds"]);
    assert_eq!(records[1].value, PluginValue::Flag(false));
    assert!(matches!(records[2].value, PluginValue::Options(_)));
}

#[test]
fn non_boolean_non_object_values_are_excluded() {
    let mut toggles = Map::new();
    toggles.insert("removeComments".into(), Value::from(5));
    toggles.insert("removeTitle".into(), Value::String("yes".into()));
    toggles.insert("removeDesc".into(), Value::Null);
    toggles.insert("mergePaths".into(), Value::Bool(true));

    let records = minify_records(&toggles);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "mergePaths");
}

#[test]
fn unknown_names_are_excluded() {
    let mut toggles = Map::new();
    toggles.insert("removeComments".into(), Value::Bool(true));
    toggles.insert("sharpenEdges".into(), Value::Bool(true));

    let records = minify_records(&toggles);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "removeComments");
}

#[test]
fn format_pipeline_is_fixed_and_fully_disabled() {
    let records = format_records();
    assert_eq!(records.len(), FORMAT_PLUGINS.len());
    assert_eq!(records.len(), 36);
    for record in &records {
        assert_eq!(record.value, PluginValue::Flag(false), "{}", record.name);
    }
    // order is the declared table order
    let names: Vec<&str> = records.iter().map(|r| r.name).collect();
    assert_eq!(names, FORMAT_PLUGINS);
}

#[test]
fn single_override_keeps_full_table_and_order() {
    // settings set removeComments only; everything else comes from the
    // default table
    let settings = Settings::from_value(json!({
        "svg.minify": {"removeComments": true}
    }));
    let toggles = settings.minify_toggles();
    let records = minify_records(&toggles);

    assert_eq!(records.len(), PLUGINS.len());
    let names: Vec<&str> = records.iter().map(|r| r.name).collect();
    let table: Vec<&str> = PLUGINS.iter().map(|s| s.name).collect();
    assert_eq!(names, table);

    let record = records.iter().find(|r| r.name == "removeComments").unwrap();
    assert_eq!(record.value, PluginValue::Flag(true));
}

#[test]
fn records_serialize_in_optimizer_wire_shape() {
    let mut toggles = Map::new();
    toggles.insert("removeComments".into(), Value::Bool(true));
    toggles.insert("prefixIds".into(), json!({"prefix": "icon"}));

    let records = minify_records(&toggles);
    assert_eq!(
        serde_json::to_value(&records).unwrap(),
        json!([
            {"removeComments": true},
            {"prefixIds": {"prefix": "icon"}}
        ])
    );
}

#[test]
fn default_table_disables_the_risky_plugins() {
    let disabled: Vec<&str> = PLUGINS
        .iter()
        .filter(|s| !s.default)
        .map(|s| s.name)
        .collect();
    assert_eq!(
        disabled,
        [
            "removeRasterImages",
            "sortAttrs",
            "removeDimensions",
            "removeAttrs",
            "removeAttributesBySelector",
            "removeElementsByAttr",
            "addClassesToSVGElement",
            "addAttributesToSVGElement",
            "removeOffCanvasPaths",
            "removeStyleElement",
            "removeScriptElement",
            "reusePaths",
        ]
    );
}

#[test]
fn builder_output_is_reproducible() {
    let toggles = default_toggles();
    let a: Vec<ActivationRecord> = minify_records(&toggles);
    let b: Vec<ActivationRecord> = minify_records(&toggles);
    assert_eq!(a, b);
}
