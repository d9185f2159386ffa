//! End-to-end command tests against in-memory hosts and a temp directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use svgmin::commands::{
    FormattingOptions, copy_data_uri, format_document, min_sibling, minify_in_place,
    minify_to_file,
};
use svgmin::host::{
    Clipboard, Confirmation, DocumentEditor, DocumentView, SKIP_MINIFY_WARNING, StateStore,
    WarningGate,
};
use svgmin::plugins::{ToggleSet, default_toggles};
use svgmin::{Settings, XmlOptimizer};

#[derive(Default)]
struct MemStore {
    flags: HashMap<String, bool>,
}

impl StateStore for MemStore {
    fn get_flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    fn set_flag(&mut self, key: &str, value: bool) {
        self.flags.insert(key.to_string(), value);
    }
}

struct ScriptedGate {
    reply: Confirmation,
    asked: usize,
}

impl ScriptedGate {
    fn new(reply: Confirmation) -> Self {
        Self { reply, asked: 0 }
    }
}

impl WarningGate for ScriptedGate {
    fn confirm(&mut self, _message: &str, _detail: &str) -> Confirmation {
        self.asked += 1;
        self.reply
    }
}

struct StaticDoc {
    language: &'static str,
    text: String,
    path: Option<PathBuf>,
}

impl StaticDoc {
    fn svg(text: &str) -> Self {
        Self {
            language: "svg",
            text: text.to_string(),
            path: None,
        }
    }
}

impl DocumentView for StaticDoc {
    fn language_id(&self) -> &str {
        self.language
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[derive(Default)]
struct BufferEditor {
    replaced: Option<String>,
}

impl DocumentEditor for BufferEditor {
    fn replace_all(&mut self, new_text: &str) {
        self.replaced = Some(new_text.to_string());
    }
}

#[derive(Default)]
struct MemClipboard {
    written: Option<String>,
}

impl Clipboard for MemClipboard {
    fn write_text(&mut self, text: &str) {
        self.written = Some(text.to_string());
    }
}

const SAMPLE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"10\">\n\
    <!-- hand-drawn -->\n\
    <g>\n\
        <rect x=\"1\" y=\"1\" width=\"8\" height=\"8\" fill=\"red\"/>\n\
    </g>\n\
</svg>\n";

fn defaults() -> ToggleSet {
    default_toggles()
}

#[test]
fn minify_to_file_writes_min_sibling() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svg");
    fs::write(&input, SAMPLE).unwrap();

    let mut store = MemStore::default();
    let mut gate = ScriptedGate::new(Confirmation::Proceed);
    let written = minify_to_file(&mut store, &mut gate, &XmlOptimizer, &defaults(), &input)
        .unwrap()
        .expect("sibling written");

    assert_eq!(written, dir.path().join("icon.min.svg"));
    let minified = fs::read_to_string(&written).unwrap();
    assert!(!minified.contains("<!--"));
    assert!(!minified.contains('\n'));
    assert!(minified.contains("<rect"));
    // the source file is untouched
    assert_eq!(fs::read_to_string(&input).unwrap(), SAMPLE);
}

#[test]
fn cancelled_gate_leaves_the_filesystem_alone() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svg");
    fs::write(&input, SAMPLE).unwrap();

    let mut store = MemStore::default();
    let mut gate = ScriptedGate::new(Confirmation::Cancel);
    let written =
        minify_to_file(&mut store, &mut gate, &XmlOptimizer, &defaults(), &input).unwrap();

    assert!(written.is_none());
    assert!(!min_sibling(&input).exists());
    assert!(!store.get_flag(SKIP_MINIFY_WARNING));
}

#[test]
fn remembered_dismissal_skips_the_gate() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svg");
    fs::write(&input, SAMPLE).unwrap();

    let mut store = MemStore::default();
    let mut gate = ScriptedGate::new(Confirmation::ProceedAndRemember);

    minify_to_file(&mut store, &mut gate, &XmlOptimizer, &defaults(), &input)
        .unwrap()
        .expect("first run writes");
    assert!(store.get_flag(SKIP_MINIFY_WARNING));

    minify_to_file(&mut store, &mut gate, &XmlOptimizer, &defaults(), &input)
        .unwrap()
        .expect("second run writes");
    assert_eq!(gate.asked, 1, "gate asked once, then remembered");
}

#[test]
fn missing_input_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nowhere.svg");

    let mut store = MemStore::default();
    let mut gate = ScriptedGate::new(Confirmation::Proceed);
    let written =
        minify_to_file(&mut store, &mut gate, &XmlOptimizer, &defaults(), &input).unwrap();
    assert!(written.is_none());
}

#[test]
fn minify_in_place_replaces_svg_documents_only() {
    let mut store = MemStore::default();
    let mut gate = ScriptedGate::new(Confirmation::Proceed);
    let mut editor = BufferEditor::default();

    let doc = StaticDoc::svg(SAMPLE);
    let applied = minify_in_place(
        &mut store,
        &mut gate,
        &XmlOptimizer,
        &defaults(),
        &doc,
        &mut editor,
    )
    .unwrap();
    assert!(applied);
    let replaced = editor.replaced.as_deref().unwrap();
    assert!(!replaced.contains("<!--"));

    let other = StaticDoc {
        language: "xml",
        text: SAMPLE.to_string(),
        path: None,
    };
    let mut editor = BufferEditor::default();
    let applied = minify_in_place(
        &mut store,
        &mut gate,
        &XmlOptimizer,
        &defaults(),
        &other,
        &mut editor,
    )
    .unwrap();
    assert!(!applied);
    assert!(editor.replaced.is_none());
}

#[test]
fn optimizer_failure_applies_no_edit() {
    let mut store = MemStore::default();
    let mut gate = ScriptedGate::new(Confirmation::Proceed);
    let mut editor = BufferEditor::default();

    let doc = StaticDoc::svg("<svg><broken");
    let result = minify_in_place(
        &mut store,
        &mut gate,
        &XmlOptimizer,
        &defaults(),
        &doc,
        &mut editor,
    );
    assert!(result.is_err());
    assert!(editor.replaced.is_none());
}

#[test]
fn data_uri_round_trips_through_base64() {
    let doc = StaticDoc::svg(SAMPLE);
    let mut clipboard = MemClipboard::default();
    let written = copy_data_uri(&XmlOptimizer, &defaults(), &doc, &mut clipboard).unwrap();
    assert!(written);

    let uri = clipboard.written.unwrap();
    let payload = uri
        .strip_prefix("data:image/svg+xml;base64,")
        .expect("data URI prefix");
    let decoded = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
    assert!(decoded.starts_with("<svg"));
    assert!(decoded.contains("<rect"));
}

#[test]
fn data_uri_skips_non_svg_documents() {
    let doc = StaticDoc {
        language: "markdown",
        text: "# not an svg".to_string(),
        path: None,
    };
    let mut clipboard = MemClipboard::default();
    let written = copy_data_uri(&XmlOptimizer, &defaults(), &doc, &mut clipboard).unwrap();
    assert!(!written);
    assert!(clipboard.written.is_none());
}

#[test]
fn format_pretty_prints_with_requested_indent() {
    let minified = r#"<svg xmlns="http://www.w3.org/2000/svg"><g><rect/></g></svg>"#;
    let formatted = format_document(&XmlOptimizer, minified, FormattingOptions { tab_size: 2 })
        .unwrap()
        .expect("formatted output");
    assert!(formatted.contains("\n  <g>"));
    assert!(formatted.contains("\n    <rect/>"));
}

#[test]
fn format_preserves_content_the_minify_defaults_would_drop() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><!-- keep me --><title>Logo</title><rect/></svg>"#;
    let formatted = format_document(&XmlOptimizer, svg, FormattingOptions::default())
        .unwrap()
        .expect("formatted output");
    assert!(formatted.contains("keep me"));
    assert!(formatted.contains("<title>Logo</title>"));
}

#[test]
fn all_disabled_minify_is_idempotent_on_minified_input() {
    let minified = r##"<svg xmlns="http://www.w3.org/2000/svg"><rect fill="#fff"/></svg>"##;
    let settings = Settings::from_value(Value::Object({
        let mut minify = serde_json::Map::new();
        for (name, _) in default_toggles() {
            minify.insert(name, Value::Bool(false));
        }
        let mut doc = serde_json::Map::new();
        doc.insert("svg.minify".to_string(), Value::Object(minify));
        doc
    }));
    let out = svgmin::minify(minified, &settings).unwrap();
    assert_eq!(out, minified);
}
