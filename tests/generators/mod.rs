//! Synthetic transcript generators for tests and benchmarks.
//!
//! These helpers build chat export text line by line so tests can
//! construct transcripts with known windows, senders, and event mixes
//! without shipping fixture files.

// Each test binary compiles its own copy, so not every helper is used
// from every consumer.
#![allow(dead_code)]

use chrono::{Datelike, Days, NaiveDate};

/// Configuration for synthetic transcript generation.
#[derive(Debug, Clone)]
pub struct TranscriptConfig {
    /// First calendar day of the transcript.
    pub start_date: NaiveDate,
    /// Number of consecutive days to generate.
    pub days: usize,
    /// Sender names rotated through the day's messages.
    pub users: Vec<String>,
    /// User messages generated per day.
    pub messages_per_day: usize,
    /// Join events generated per day.
    pub joins_per_day: usize,
    /// Interleave unparseable continuation lines.
    pub include_noise: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            days: 7,
            users: vec![
                "Alice".to_string(),
                "Bob".to_string(),
                "Carol".to_string(),
            ],
            messages_per_day: 10,
            joins_per_day: 1,
            include_noise: true,
        }
    }
}

impl TranscriptConfig {
    /// A minimal two-day transcript with no joins or noise.
    pub fn minimal() -> Self {
        Self {
            days: 2,
            messages_per_day: 2,
            joins_per_day: 0,
            include_noise: false,
            ..Self::default()
        }
    }

    /// A month-long transcript with heavy daily traffic.
    pub fn large() -> Self {
        Self {
            days: 30,
            messages_per_day: 200,
            ..Self::default()
        }
    }
}

/// Format a date as the export's leading date token.
pub fn date_token(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year() % 100)
}

/// Build a user message line.
pub fn message_line(date: NaiveDate, time: &str, sender: &str, body: &str) -> String {
    format!("{}, {} - {}: {}", date_token(date), time, sender, body)
}

/// Build a join event line.
pub fn join_line(date: NaiveDate, time: &str, name: &str) -> String {
    format!(
        "{}, {} - {} joined using this group's invite link",
        date_token(date),
        time,
        name
    )
}

/// Build a system event line with the given announcement text.
pub fn system_line(date: NaiveDate, time: &str, text: &str) -> String {
    format!("{}, {} - {}", date_token(date), time, text)
}

/// Deterministic clock text for the nth event of a day.
pub fn clock(idx: usize) -> String {
    let hour = 1 + (idx % 12);
    let minute = (idx * 7) % 60;
    let meridiem = if idx % 2 == 0 { "AM" } else { "PM" };
    format!("{hour}:{minute:02} {meridiem}")
}

/// Generate a complete synthetic transcript.
///
/// Days are emitted in chronological order. Each day carries its joins
/// first, then its messages with senders rotating through
/// `config.users`. Noise lines mimic wrapped message continuations and
/// never carry a leading date token.
pub fn generate_transcript(config: &TranscriptConfig) -> String {
    let mut out = String::new();

    for day_idx in 0..config.days {
        let date = config
            .start_date
            .checked_add_days(Days::new(day_idx as u64))
            .expect("generator date range overflowed");

        if config.include_noise && day_idx % 2 == 0 {
            out.push_str("and that wraps up what I was saying yesterday\n");
        }

        for join_idx in 0..config.joins_per_day {
            let name = format!("Newcomer{day_idx}x{join_idx}");
            out.push_str(&join_line(date, &clock(join_idx), &name));
            out.push('\n');
        }

        for msg_idx in 0..config.messages_per_day {
            let sender = &config.users[msg_idx % config.users.len()];
            let body = format!("note {msg_idx} from day {day_idx}");
            out.push_str(&message_line(date, &clock(msg_idx), sender, &body));
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_pulse::classify::classify;
    use chat_pulse::model::ClassifiedEvent;
    use chat_pulse::parser::TranscriptParser;

    #[test]
    fn test_minimal_config_line_count() {
        let config = TranscriptConfig::minimal();
        let text = generate_transcript(&config);

        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_generated_message_lines_parse() {
        let config = TranscriptConfig::default();
        let text = generate_transcript(&config);

        let mut parser = TranscriptParser::new();
        let messages = parser.parse_text(&text);

        let expected = config.days * (config.messages_per_day + config.joins_per_day);
        assert_eq!(messages.len(), expected);
    }

    #[test]
    fn test_join_lines_classify_as_joins() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let line = join_line(date, "9:00 AM", "Dana");

        let mut parser = TranscriptParser::new();
        let parsed = parser.parse_line(&line).expect("join line should parse");

        assert_eq!(classify(&parsed.content), ClassifiedEvent::Join);
    }

    #[test]
    fn test_clock_is_deterministic() {
        assert_eq!(clock(0), "1:00 AM");
        assert_eq!(clock(3), "4:21 PM");
        assert_eq!(clock(12), "1:24 AM");
    }

    #[test]
    fn test_date_token_uses_two_digit_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date_token(date), "3/7/24");
    }
}
