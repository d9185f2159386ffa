//! The optimizer seam.
//!
//! Parsing, tree transformation, and minification are optimizer concerns.
//! Commands talk to the optimizer through [`Optimizer`] only, so hosts can
//! bind the bundled [`crate::XmlOptimizer`] or a full external engine
//! without touching the command layer.

use crate::error::SvgminError;
use crate::plugins::ActivationRecord;

/// How the optimizer should emit the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Whitespace-free output.
    Minified,
    /// One element per line, children indented by `indent` spaces.
    Pretty { indent: u8 },
}

/// One optimizer invocation: the plugin pipeline plus the output style.
///
/// `plugins` is ordered; the optimizer applies records sequentially.
#[derive(Debug, Clone)]
pub struct OptimizeJob {
    pub plugins: Vec<ActivationRecord>,
    pub output: OutputStyle,
}

impl OptimizeJob {
    pub fn minify(plugins: Vec<ActivationRecord>) -> Self {
        Self {
            plugins,
            output: OutputStyle::Minified,
        }
    }

    pub fn pretty(plugins: Vec<ActivationRecord>, indent: u8) -> Self {
        Self {
            plugins,
            output: OutputStyle::Pretty { indent },
        }
    }
}

/// An SVG optimizer.
///
/// Implementations apply `job.plugins` in order to the parsed document and
/// serialize per `job.output`. A failure must leave the caller's document
/// untouched: optimizers return the new text, they never write anywhere.
pub trait Optimizer {
    fn optimize(&self, source: &str, job: &OptimizeJob) -> Result<String, SvgminError>;
}
