//! Copy a minified document to the clipboard as a data URI.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::SvgminError;
use crate::host::{Clipboard, DocumentView, SVG_LANGUAGE};
use crate::optimizer::{OptimizeJob, Optimizer};
use crate::plugins::{ToggleSet, minify_records};

/// Minify the document and place it on the clipboard as a
/// `data:image/svg+xml;base64,` URI.
///
/// Non-SVG documents produce no clipboard write. Returns whether the
/// clipboard was written.
pub fn copy_data_uri<O, D, C>(
    optimizer: &O,
    toggles: &ToggleSet,
    doc: &D,
    clipboard: &mut C,
) -> Result<bool, SvgminError>
where
    O: Optimizer,
    D: DocumentView,
    C: Clipboard,
{
    if doc.language_id() != SVG_LANGUAGE {
        return Ok(false);
    }

    let job = OptimizeJob::minify(minify_records(toggles));
    let minified = optimizer.optimize(&doc.text(), &job)?;
    if minified.is_empty() {
        return Ok(false);
    }

    let uri = format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(minified.as_bytes())
    );
    clipboard.write_text(&uri);
    Ok(true)
}
