//! Human-readable text report.

use std::io::Write;

use crate::error::Result;
use crate::model::AnalysisResult;
use crate::util::scaled_bar;
use crate::window::WINDOW_DAYS;

use super::{Renderer, ReportOptions};

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Renders the standard activity report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create a new text renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextRenderer {
    fn render<W: Write>(
        &self,
        result: &AnalysisResult,
        writer: &mut W,
        options: &ReportOptions,
    ) -> Result<()> {
        let (bold, reset) = if options.color { (BOLD, RESET) } else { ("", "") };
        let sep = if options.unicode { "│" } else { "|" };

        writeln!(writer, "{bold}Group Activity Report{reset}")?;
        writeln!(writer, "=====================")?;
        writeln!(writer)?;
        writeln!(
            writer,
            "Date Range: {} to {}",
            result.date_range.start, result.date_range.end
        )?;
        writeln!(writer)?;

        writeln!(writer, "{:<20}{}", "Total Users:", result.total_users)?;
        writeln!(
            writer,
            "{:<20}{}",
            format!("New Joins ({WINDOW_DAYS} days):"),
            result.new_joins()
        )?;
        writeln!(
            writer,
            "{:<20}{}",
            "Peak Daily Active:",
            result.peak_daily_active()
        )?;
        writeln!(
            writer,
            "{:<20}{}",
            "Avg Daily Messages:",
            result.avg_daily_messages()
        )?;
        writeln!(writer)?;

        writeln!(writer, "{bold}Daily Activity{reset}")?;
        writeln!(writer, "--------------")?;
        let max_active = result
            .days
            .iter()
            .map(|d| d.active_user_count() as usize)
            .max()
            .unwrap_or(0);
        for day in &result.days {
            if options.chart {
                let bar = scaled_bar(
                    day.active_user_count() as usize,
                    max_active,
                    options.chart_width,
                    options.unicode,
                );
                let bar = if options.color {
                    format!("{GREEN}{bar}{RESET}")
                } else {
                    bar
                };
                writeln!(
                    writer,
                    "  {:<6} {sep} {bar} {sep} {} active, {} joined, {} messages",
                    day.day_key,
                    day.active_user_count(),
                    day.new_users,
                    day.messages
                )?;
            } else {
                writeln!(
                    writer,
                    "  {:<6} {sep} {} active, {} joined, {} messages",
                    day.day_key,
                    day.active_user_count(),
                    day.new_users,
                    day.messages
                )?;
            }
        }
        writeln!(writer)?;

        writeln!(writer, "{bold}Consistent Participants{reset}")?;
        writeln!(writer, "-----------------------")?;
        if result.consistent_users.is_empty() {
            writeln!(writer, "  No consistently active users found")?;
        } else {
            for user in &result.consistent_users {
                writeln!(
                    writer,
                    "  {bold}{}{reset} - Active {} out of {WINDOW_DAYS} days",
                    user.name, user.active_days
                )?;
                writeln!(writer, "    Days: {}", user.days_active.join(", "))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::analytics::WindowAggregator;
    use crate::model::ParsedMessage;
    use crate::window::ReportWindow;

    use super::*;

    fn sample() -> AnalysisResult {
        let latest = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let mut agg = WindowAggregator::new(ReportWindow::ending_at(latest));
        for (day, content) in [
            (1, "Alice: hi"),
            (1, "Bob: hey"),
            (2, "Alice: yo"),
            (2, "Carol joined using this group's invite link"),
        ] {
            agg.process_message(&ParsedMessage {
                date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                time: "9:00 AM".to_string(),
                content: content.to_string(),
            });
        }
        agg.finish()
    }

    fn render_to_string(options: &ReportOptions) -> String {
        let mut buf = Vec::new();
        TextRenderer::new()
            .render(&sample(), &mut buf, options)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_renders_header_and_range() {
        let output = render_to_string(&ReportOptions::default());
        assert!(output.starts_with("Group Activity Report\n====================="));
        assert!(output.contains("Date Range: Dec 27 to Jan 2"));
    }

    #[test]
    fn test_renders_stat_cards() {
        let output = render_to_string(&ReportOptions::default());
        assert!(output.contains("Total Users:        2"));
        assert!(output.contains("New Joins (7 days): 1"));
        assert!(output.contains("Peak Daily Active:  2"));
    }

    #[test]
    fn test_renders_one_row_per_window_day() {
        let output = render_to_string(&ReportOptions::default());
        for key in ["Dec 27", "Dec 28", "Dec 29", "Dec 30", "Dec 31", "Jan 1", "Jan 2"] {
            assert!(output.contains(key), "missing day row: {key}");
        }
        assert!(output.contains("2 active, 0 joined, 2 messages"));
        assert!(output.contains("1 active, 1 joined, 1 messages"));
    }

    #[test]
    fn test_unicode_and_ascii_bars() {
        let unicode = render_to_string(&ReportOptions::default());
        assert!(unicode.contains('█'));
        assert!(unicode.contains('░'));

        let ascii = render_to_string(&ReportOptions::default().with_unicode(false));
        assert!(!ascii.contains('█'));
        assert!(ascii.contains('#'));
    }

    #[test]
    fn test_chart_can_be_disabled() {
        let output = render_to_string(&ReportOptions::default().with_chart(false));
        assert!(!output.contains('█'));
        assert!(output.contains("2 active, 0 joined, 2 messages"));
    }

    #[test]
    fn test_color_codes_only_when_enabled() {
        let plain = render_to_string(&ReportOptions::default());
        assert!(!plain.contains("\x1b["));

        let colored = render_to_string(&ReportOptions::default().with_color(true));
        assert!(colored.contains("\x1b[1m"));
        assert!(colored.contains("\x1b[32m"));
    }

    #[test]
    fn test_empty_consistent_section() {
        let output = render_to_string(&ReportOptions::default());
        assert!(output.contains("No consistently active users found"));
    }

    #[test]
    fn test_consistent_user_lines() {
        let latest = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let mut agg = WindowAggregator::new(ReportWindow::ending_at(latest));
        for day in 1..=5 {
            agg.process_message(&ParsedMessage {
                date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                time: "9:00 AM".to_string(),
                content: "Alice: hi".to_string(),
            });
        }

        let mut buf = Vec::new();
        TextRenderer::new()
            .render(&agg.finish(), &mut buf, &ReportOptions::default())
            .unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("Alice - Active 5 out of 7 days"));
        assert!(output.contains("Days: Jan 1, Jan 2, Jan 3, Jan 4, Jan 5"));
    }
}
