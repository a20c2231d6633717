//! Line-oriented parsing of exported chat transcripts.
//!
//! A transcript is plain text, one line per message or system event:
//!
//! ```text
//! 1/2/24, 9:15 PM - Alice: morning all
//! ```
//!
//! Parsing is always lenient: lines that fail the grammar (multi-line
//! continuations, export banners, blanks) are skipped silently and
//! surfaced only through [`ParseStats`] and trace-level logs. There is no
//! partial extraction; either all three fields are recovered or the line
//! is discarded in full.
//!
//! # Example
//!
//! ```rust
//! use chat_pulse::parser::TranscriptParser;
//!
//! let mut parser = TranscriptParser::new();
//! let msg = parser.parse_line("1/2/24, 9:15 PM - Alice: morning all").unwrap();
//! assert_eq!(msg.content, "Alice: morning all");
//! assert_eq!(parser.stats().messages_parsed, 1);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::model::ParsedMessage;
use crate::window::resolve_date_token;

/// Message line grammar: date token, comma, time with AM/PM, dash, content.
///
/// The AM/PM suffix is uppercase-only, as written by the export.
static MESSAGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s+(\d{1,2}:\d{2}\s*[AP]M)\s*-\s*(.+)$").unwrap()
});

/// Transcript line parser.
#[derive(Debug, Default)]
pub struct TranscriptParser {
    stats: ParseStats,
}

/// Statistics about parsing operations.
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// Total lines processed.
    pub lines_seen: usize,
    /// Lines successfully parsed as messages.
    pub messages_parsed: usize,
    /// Non-blank lines that failed the grammar or carried an invalid date.
    pub lines_skipped: usize,
    /// Blank lines.
    pub empty_lines: usize,
}

impl ParseStats {
    /// Share of non-blank lines that parsed as messages, as a percentage.
    #[must_use]
    pub fn match_rate(&self) -> f64 {
        let candidates = self.lines_seen - self.empty_lines;
        if candidates == 0 {
            return 100.0;
        }
        (self.messages_parsed as f64 / candidates as f64) * 100.0
    }
}

impl TranscriptParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get parse statistics.
    #[must_use]
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Parse a single transcript line.
    ///
    /// Returns `None` for blank lines, lines that fail the grammar, and
    /// lines whose date token does not resolve to a calendar date.
    pub fn parse_line(&mut self, line: &str) -> Option<ParsedMessage> {
        self.stats.lines_seen += 1;

        if line.trim().is_empty() {
            self.stats.empty_lines += 1;
            return None;
        }

        let Some(caps) = MESSAGE_LINE.captures(line) else {
            self.stats.lines_skipped += 1;
            trace!(preview = %truncate_preview(line, 60), "line does not match message grammar");
            return None;
        };

        let token = &caps[1];
        let Some(date) = resolve_date_token(token) else {
            self.stats.lines_skipped += 1;
            trace!(token, "date token failed resolution");
            return None;
        };

        self.stats.messages_parsed += 1;
        Some(ParsedMessage {
            date,
            time: caps[2].to_string(),
            content: caps[3].to_string(),
        })
    }

    /// Parse every line of a transcript, collecting the matches.
    ///
    /// Handles both `\n` and `\r\n` line endings.
    pub fn parse_text(&mut self, text: &str) -> Vec<ParsedMessage> {
        text.lines()
            .filter_map(|line| self.parse_line(line))
            .collect()
    }
}

/// Truncate a string for log preview display.
///
/// Uses character-aware truncation to avoid splitting multi-byte UTF-8.
fn truncate_preview(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
