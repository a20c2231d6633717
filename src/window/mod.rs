//! Date resolution and the trailing seven-day reporting window.
//!
//! The window is anchored to the most recent calendar date found anywhere
//! in the input: `[latest - 6, latest]`, bounds inclusive. Dates are
//! gathered from the leading date token of every line, so a transcript
//! whose tail is noise still anchors on its newest real date.

use chrono::{Datelike, Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PulseError, Result};

/// Length of the reporting window in days.
pub const WINDOW_DAYS: usize = 7;

/// Fixed English month abbreviations for day-keys.
const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

static LEADING_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap());

/// Resolve a `M/D/Y` date token to a calendar date.
///
/// Returns `None` for non-numeric or structurally invalid tokens, including
/// out-of-range fields such as `13/40/24`. Two-digit years get a fixed `20`
/// prefix (`"24"` resolves to 2024); pre-2000 two-digit years are
/// unsupported.
#[must_use]
pub fn resolve_date_token(token: &str) -> Option<NaiveDate> {
    let mut parts = token.split('/');
    let month = parts.next()?;
    let day = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if !numeric_field(month, 1, 2) || !numeric_field(day, 1, 2) || !numeric_field(year, 2, 4) {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let year: i32 = if year.len() == 2 {
        2000 + year.parse::<i32>().ok()?
    } else {
        year.parse().ok()?
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Check that a date field is all ASCII digits within the length bounds.
fn numeric_field(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Extract a calendar date from a line's leading date token, if any.
///
/// The token must sit at the start of the line and end at a word boundary;
/// the rest of the line is ignored, so lines that fail the full message
/// grammar still contribute their date to the window.
#[must_use]
pub fn leading_date(line: &str) -> Option<NaiveDate> {
    LEADING_DATE
        .find(line)
        .and_then(|m| resolve_date_token(m.as_str()))
}

/// Render a date as its day-key, e.g. `"Jan 2"`.
#[must_use]
pub fn day_key(date: NaiveDate) -> String {
    format!("{} {}", MONTH_ABBR[date.month0() as usize], date.day())
}

/// The trailing seven-day reporting window, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    start: NaiveDate,
    latest: NaiveDate,
}

impl ReportWindow {
    /// Establish the window from every resolvable leading date in the text.
    ///
    /// Zero resolvable dates across the whole input is the engine's single
    /// fatal condition.
    pub fn from_text(text: &str) -> Result<Self> {
        let latest = text
            .lines()
            .filter_map(leading_date)
            .max()
            .ok_or(PulseError::NoValidMessages)?;
        Ok(Self::ending_at(latest))
    }

    /// Build the window ending at the given day.
    #[must_use]
    pub fn ending_at(latest: NaiveDate) -> Self {
        Self {
            start: latest - Days::new(WINDOW_DAYS as u64 - 1),
            latest,
        }
    }

    /// First day of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window.
    #[must_use]
    pub const fn latest(&self) -> NaiveDate {
        self.latest
    }

    /// Whether the date falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.latest
    }

    /// All days of the window in ascending order.
    #[must_use]
    pub fn days(&self) -> [NaiveDate; WINDOW_DAYS] {
        std::array::from_fn(|i| self.start + Days::new(i as u64))
    }
}
