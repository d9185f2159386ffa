//! Whole-document pretty formatting.

use crate::error::SvgminError;
use crate::optimizer::{OptimizeJob, Optimizer};
use crate::plugins::format_records;

/// Host formatting request parameters.
#[derive(Debug, Clone, Copy)]
pub struct FormattingOptions {
    /// Indent width in spaces, typically the editor tab size.
    pub tab_size: u8,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self { tab_size: 4 }
    }
}

/// Produce the pretty-printed replacement text for a whole document, for a
/// host's formatting provider to apply as a full-range edit.
///
/// The plugin pipeline is the fixed format table: every destructive
/// plugin disabled, regardless of user settings.
pub fn format_document<O: Optimizer>(
    optimizer: &O,
    text: &str,
    options: FormattingOptions,
) -> Result<Option<String>, SvgminError> {
    let job = OptimizeJob::pretty(format_records(), options.tab_size);
    let formatted = optimizer.optimize(text, &job)?;
    Ok((!formatted.is_empty()).then_some(formatted))
}
