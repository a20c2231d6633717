//! Report rendering for analysis results.
//!
//! This module provides the output formats:
//! - Text: human-readable activity report with stat cards and bar charts
//! - JSON: structured data for downstream tooling
//! - TSV: spreadsheet-compatible tabular data
//!
//! All renderers write to any [`Write`] target and share a common
//! [`ReportOptions`].

mod json;
mod text;
mod tsv;

pub use json::JsonRenderer;
pub use text::TextRenderer;
pub use tsv::TsvRenderer;

use std::io::Write;

use crate::error::Result;
use crate::model::AnalysisResult;

/// Common rendering options shared across formats.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Emit ANSI color codes in text output.
    pub color: bool,
    /// Draw bar charts with Unicode block characters.
    pub unicode: bool,
    /// Include the daily activity chart in text output.
    pub chart: bool,
    /// Bar chart width in characters.
    pub chart_width: usize,
    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
            chart: true,
            chart_width: 20,
            pretty_json: false,
        }
    }
}

impl ReportOptions {
    /// Builder: emit ANSI colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder: use Unicode bar characters.
    #[must_use]
    pub fn with_unicode(mut self, unicode: bool) -> Self {
        self.unicode = unicode;
        self
    }

    /// Builder: include the daily activity chart.
    #[must_use]
    pub fn with_chart(mut self, chart: bool) -> Self {
        self.chart = chart;
        self
    }

    /// Builder: set the bar chart width.
    #[must_use]
    pub fn with_chart_width(mut self, width: usize) -> Self {
        self.chart_width = width;
        self
    }

    /// Builder: pretty-print JSON.
    #[must_use]
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }
}

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable text report.
    Text,
    /// Structured JSON.
    Json,
    /// Tab-separated values.
    Tsv,
}

impl ReportFormat {
    /// Get the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Tsv => "tsv",
        }
    }

    /// Parse format from string.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "tsv" => Some(Self::Tsv),
            _ => None,
        }
    }
}

/// Trait for report renderers.
pub trait Renderer {
    /// Render an analysis result to the writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the target fails.
    fn render<W: Write>(
        &self,
        result: &AnalysisResult,
        writer: &mut W,
        options: &ReportOptions,
    ) -> Result<()>;
}

/// Render a result to the writer in the given format.
///
/// # Errors
///
/// Returns an error if writing to the target fails.
pub fn render<W: Write>(
    result: &AnalysisResult,
    format: ReportFormat,
    writer: &mut W,
    options: &ReportOptions,
) -> Result<()> {
    match format {
        ReportFormat::Text => TextRenderer::new().render(result, writer, options),
        ReportFormat::Json => JsonRenderer::new().render(result, writer, options),
        ReportFormat::Tsv => TsvRenderer::new().render(result, writer, options),
    }
}
