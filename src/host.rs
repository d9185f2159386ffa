//! Seams to the hosting editor's services.
//!
//! Commands never touch an editor API directly; they go through these
//! traits so a real editor, the reference CLI, and the tests can all bind
//! them. The persisted flag store is injected into every command that needs
//! it and read/written through explicit calls; nothing here is ambient
//! state.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::warn;

/// Language identifier hosts assign to SVG documents.
pub const SVG_LANGUAGE: &str = "svg";

/// Key remembering that the destructive-minify warning was dismissed for
/// good.
pub const SKIP_MINIFY_WARNING: &str = "svg.skipMinifyWarning";

/// Read-only view of an open document.
pub trait DocumentView {
    /// Host-assigned language identifier, e.g. `"svg"`.
    fn language_id(&self) -> &str;
    /// Full document text.
    fn text(&self) -> String;
    /// Backing file, when the document has one.
    fn path(&self) -> Option<&Path>;
}

/// Applies whole-document replacements.
pub trait DocumentEditor {
    fn replace_all(&mut self, new_text: &str);
}

/// Clipboard sink.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// Outcome of the destructive-minify confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Go ahead this time.
    Proceed,
    /// Go ahead and stop asking.
    ProceedAndRemember,
    Cancel,
}

/// Modal confirmation shown before destructive commands.
pub trait WarningGate {
    fn confirm(&mut self, message: &str, detail: &str) -> Confirmation;
}

/// Persisted per-workspace flags.
pub trait StateStore {
    fn get_flag(&self, key: &str) -> bool;
    fn set_flag(&mut self, key: &str, value: bool);
}

/// Flag store persisted as a small JSON object on disk.
///
/// Reads happen once at open; every write persists immediately. Write
/// failures are logged and otherwise ignored, since losing the flag only
/// means the warning shows again.
#[derive(Debug)]
pub struct FileStateStore {
    path: PathBuf,
    flags: Map<String, Value>,
}

impl FileStateStore {
    /// Open the store at `path`, starting empty when the file is missing
    /// or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let flags = std::fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default();
        Self { path, flags }
    }

    /// Store location under the user data directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "svgmin")
            .map(|dirs| dirs.data_dir().join("state.json"))
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(error = %e, "could not create state directory");
            return;
        }
        match serde_json::to_string_pretty(&self.flags) {
            Ok(text) => {
                if let Err(e) = std::fs::write(&self.path, text) {
                    warn!(error = %e, path = %self.path.display(), "could not persist state");
                }
            }
            Err(e) => warn!(error = %e, "could not encode state"),
        }
    }
}

impl StateStore for FileStateStore {
    fn get_flag(&self, key: &str) -> bool {
        self.flags.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    fn set_flag(&mut self, key: &str, value: bool) {
        self.flags.insert(key.to_string(), Value::Bool(value));
        self.persist();
    }
}
