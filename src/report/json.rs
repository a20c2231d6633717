//! JSON report output.

use std::io::Write;

use crate::error::Result;
use crate::model::AnalysisResult;

use super::{Renderer, ReportOptions};

/// Renders the analysis result as JSON.
///
/// Output is a single object ending in a newline. Key order follows the
/// field order of [`AnalysisResult`], so identical input always produces
/// byte-identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a new JSON renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for JsonRenderer {
    fn render<W: Write>(
        &self,
        result: &AnalysisResult,
        writer: &mut W,
        options: &ReportOptions,
    ) -> Result<()> {
        if options.pretty_json {
            serde_json::to_writer_pretty(&mut *writer, result)?;
        } else {
            serde_json::to_writer(&mut *writer, result)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
