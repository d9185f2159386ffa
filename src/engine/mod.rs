//! The bundled optimizer.
//!
//! A quick-xml pipeline: parse to a document tree, apply each activation
//! record as a structural pass, serialize minified or pretty. Plugins that
//! call for path, style, transform, or geometry rewriting are accepted and
//! skipped; binding a full optimizer through [`Optimizer`] replaces this
//! engine wholesale without touching the command layer.

mod ast;
mod parse;
mod passes;
mod serialize;

pub use ast::{Attr, Elem, SvgDocument, XmlDecl, XmlNode};
pub use parse::parse_svg;
pub use serialize::serialize;

use crate::error::SvgminError;
use crate::optimizer::{OptimizeJob, Optimizer};

/// The built-in structural engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlOptimizer;

impl Optimizer for XmlOptimizer {
    fn optimize(&self, source: &str, job: &OptimizeJob) -> Result<String, SvgminError> {
        let mut doc = parse_svg(source)?;
        for record in &job.plugins {
            passes::apply(&mut doc, record);
        }
        Ok(serialize(&doc, job.output))
    }
}
