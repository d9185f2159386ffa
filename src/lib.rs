//! svgmin - editor-style SVG minify and format commands
//!
//! svgmin assembles an ordered plugin pipeline from user settings and hands
//! it to an [`Optimizer`]. A structural engine is bundled; hosts may bind a
//! full optimizer instead. Editor services (documents, clipboard, the
//! destructive-minify confirmation, persisted flags) are traits in
//! [`host`], so the commands in [`commands`] run unchanged in an editor,
//! in the reference CLI, and in tests.

pub mod commands;
pub mod engine;
mod error;
pub mod host;
mod optimizer;
pub mod plugins;
pub mod settings;

pub use engine::XmlOptimizer;
pub use error::SvgminError;
pub use optimizer::{OptimizeJob, Optimizer, OutputStyle};
pub use settings::Settings;

/// Minify an SVG string with the given settings and the bundled engine.
pub fn minify(svg: &str, settings: &Settings) -> Result<String, SvgminError> {
    let job = OptimizeJob::minify(plugins::minify_records(&settings.minify_toggles()));
    XmlOptimizer.optimize(svg, &job)
}

/// Pretty-print an SVG string with the bundled engine.
pub fn format(svg: &str, indent: u8) -> Result<String, SvgminError> {
    let job = OptimizeJob::pretty(plugins::format_records(), indent);
    XmlOptimizer.optimize(svg, &job)
}
