//! Tab-separated report output.

use std::io::Write;

use crate::error::Result;
use crate::model::AnalysisResult;

use super::{Renderer, ReportOptions};

/// Renders the analysis result as tab-separated values.
///
/// Three record groups separated by blank lines: per-day rows, summary
/// metrics, and consistent users. Each group carries its own header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvRenderer;

impl TsvRenderer {
    /// Create a new TSV renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TsvRenderer {
    fn render<W: Write>(
        &self,
        result: &AnalysisResult,
        writer: &mut W,
        _options: &ReportOptions,
    ) -> Result<()> {
        writeln!(writer, "date\tday\tactive_users\tnew_users\tmessages")?;
        for day in &result.days {
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}",
                day.date,
                day.day_key,
                day.active_user_count(),
                day.new_users,
                day.messages
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "metric\tvalue")?;
        writeln!(writer, "total_users\t{}", result.total_users)?;
        writeln!(writer, "total_messages\t{}", result.total_messages)?;
        writeln!(writer, "total_joins\t{}", result.total_joins)?;
        writeln!(writer, "window_start\t{}", result.date_range.start)?;
        writeln!(writer, "window_end\t{}", result.date_range.end)?;
        writeln!(writer)?;

        writeln!(writer, "user\tactive_days\tdays")?;
        for user in &result.consistent_users {
            writeln!(
                writer,
                "{}\t{}\t{}",
                user.name,
                user.active_days,
                user.days_active.join(", ")
            )?;
        }

        Ok(())
    }
}
