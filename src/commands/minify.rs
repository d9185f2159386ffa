//! Minify commands: to a sibling file, and in place.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SvgminError;
use crate::host::{DocumentEditor, DocumentView, SVG_LANGUAGE, StateStore, WarningGate};
use crate::optimizer::{OptimizeJob, Optimizer};
use crate::plugins::{ToggleSet, minify_records};

/// Sibling path with `.min` inserted before the extension:
/// `icon.svg → icon.min.svg`. Extensionless paths gain a `.min` suffix.
pub fn min_sibling(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => path.with_extension(format!("min.{ext}")),
        None => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".min");
            PathBuf::from(name)
        }
    }
}

/// Minify the file at `path` into a `.min` sibling.
///
/// Returns the sibling path once written. `Ok(None)` means the command was
/// a no-op: the gate cancelled, the input was unreadable, the optimizer
/// produced nothing, or the write had to be skipped. Only an optimizer
/// failure is an error the host should surface.
pub fn minify_to_file<O: Optimizer>(
    store: &mut dyn StateStore,
    gate: &mut dyn WarningGate,
    optimizer: &O,
    toggles: &ToggleSet,
    path: &Path,
) -> Result<Option<PathBuf>, SvgminError> {
    if !super::confirm_destructive(store, gate) {
        return Ok(None);
    }

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "input not readable; nothing to do");
            return Ok(None);
        }
    };

    let job = OptimizeJob::minify(minify_records(toggles));
    let minified = optimizer.optimize(&source, &job)?;
    if minified.is_empty() {
        return Ok(None);
    }

    let sibling = min_sibling(path);
    if let Err(e) = fs::write(&sibling, &minified) {
        warn!(path = %sibling.display(), error = %e, "skipping unwritable output file");
        return Ok(None);
    }
    Ok(Some(sibling))
}

/// Replace an open SVG document with its minified form.
///
/// Non-SVG documents are left alone. Returns whether a replacement was
/// applied.
pub fn minify_in_place<O, D, E>(
    store: &mut dyn StateStore,
    gate: &mut dyn WarningGate,
    optimizer: &O,
    toggles: &ToggleSet,
    doc: &D,
    editor: &mut E,
) -> Result<bool, SvgminError>
where
    O: Optimizer,
    D: DocumentView,
    E: DocumentEditor,
{
    if doc.language_id() != SVG_LANGUAGE {
        return Ok(false);
    }
    if !super::confirm_destructive(store, gate) {
        return Ok(false);
    }

    let job = OptimizeJob::minify(minify_records(toggles));
    let minified = optimizer.optimize(&doc.text(), &job)?;
    if minified.is_empty() {
        return Ok(false);
    }

    editor.replace_all(&minified);
    Ok(true)
}
