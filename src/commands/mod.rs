//! The editor commands.

mod datauri;
mod format;
mod minify;

pub use datauri::copy_data_uri;
pub use format::{FormattingOptions, format_document};
pub use minify::{min_sibling, minify_in_place, minify_to_file};

use crate::host::{Confirmation, SKIP_MINIFY_WARNING, StateStore, WarningGate};

pub(crate) const MINIFY_WARNING: &str =
    "Minification can irreversibly change an SVG. Back up the document first.";

pub(crate) const MINIFY_WARNING_DETAIL: &str = "Some plugins rewrite or drop document \
structure and the result may not round-trip. Keep a copy of the original if it matters.";

/// Run the one-time destructive warning unless it was dismissed for good.
/// Returns whether the command may proceed.
fn confirm_destructive(store: &mut dyn StateStore, gate: &mut dyn WarningGate) -> bool {
    if store.get_flag(SKIP_MINIFY_WARNING) {
        return true;
    }
    match gate.confirm(MINIFY_WARNING, MINIFY_WARNING_DETAIL) {
        Confirmation::Proceed => true,
        Confirmation::ProceedAndRemember => {
            store.set_flag(SKIP_MINIFY_WARNING, true);
            true
        }
        Confirmation::Cancel => false,
    }
}
