//! Core data structures for transcript analysis.
//!
//! Everything here is a plain value type: parsed lines, classified events,
//! per-day buckets, and the final [`AnalysisResult`]. Values are derived
//! purely from the input text and never mutated after the aggregation pass
//! that produced them.
//!
//! Collection choices are deliberate: [`BTreeSet`] for user sets and
//! [`IndexMap`] for the per-sender activity map keep iteration and
//! serialization order stable, so analyzing the same transcript twice
//! yields identical output.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

/// A single transcript line that matched the message grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    /// Calendar date of the message.
    pub date: NaiveDate,
    /// Time-of-day token as written in the export, e.g. `"9:15 PM"`.
    pub time: String,
    /// Everything after the date/time header.
    pub content: String,
}

/// Classification of a message's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedEvent {
    /// A member joined the group, via invite link or by being added.
    Join,
    /// Group housekeeping notice (encryption banner, renames, departures).
    System,
    /// A user-authored message.
    Message {
        /// Sender name, trimmed.
        sender: String,
        /// Message body, trimmed.
        body: String,
    },
    /// Content that matched no rule; excluded from every count.
    Noise,
}

/// Distinct active day-keys per sender, in first-seen sender order.
pub type UserActivity = IndexMap<String, BTreeSet<String>>;

/// Activity counters for one day of the reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStats {
    /// Calendar date.
    pub date: NaiveDate,
    /// Display key for the date, e.g. `"Jan 2"`.
    pub day_key: String,
    /// Distinct senders who sent at least one message on this day.
    pub active_users: BTreeSet<String>,
    /// Members who joined the group on this day.
    pub new_users: u32,
    /// User messages sent on this day.
    pub messages: u32,
}

impl DayStats {
    /// Create an empty bucket for the given day.
    #[must_use]
    pub fn new(date: NaiveDate, day_key: String) -> Self {
        Self {
            date,
            day_key,
            active_users: BTreeSet::new(),
            new_users: 0,
            messages: 0,
        }
    }

    /// Number of distinct active senders on this day.
    #[must_use]
    pub fn active_user_count(&self) -> u32 {
        self.active_users.len() as u32
    }
}

/// A participant active on at least four distinct days of the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistentUser {
    /// Sender name.
    pub name: String,
    /// Number of distinct days with at least one message.
    pub active_days: u32,
    /// Day-keys of those days, sorted lexicographically.
    pub days_active: Vec<String>,
}

/// First and last day of the reporting window, rendered as day-keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// Day-key of the window's first day.
    pub start: String,
    /// Day-key of the window's last day.
    pub end: String,
}

/// Complete output of a transcript analysis.
///
/// Immutable once produced; renderers only read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// The seven days of the reporting window, oldest first.
    ///
    /// Always exactly seven entries, one per calendar day, zero-filled
    /// where no events occurred.
    pub days: Vec<DayStats>,
    /// Participants active on four or more days, most active first.
    pub consistent_users: Vec<ConsistentUser>,
    /// Distinct senders across the whole window.
    pub total_users: u32,
    /// User messages across the whole window.
    pub total_messages: u32,
    /// Joins across the whole window.
    pub total_joins: u32,
    /// Rendered bounds of the window.
    pub date_range: DateRange,
}

impl AnalysisResult {
    /// Highest single-day count of distinct active senders.
    #[must_use]
    pub fn peak_daily_active(&self) -> u32 {
        self.days
            .iter()
            .map(DayStats::active_user_count)
            .max()
            .unwrap_or(0)
    }

    /// Total joins over the window, summed from the day buckets.
    #[must_use]
    pub fn new_joins(&self) -> u32 {
        self.days.iter().map(|d| d.new_users).sum()
    }

    /// Average messages per day, rounded to the nearest whole number.
    #[must_use]
    pub fn avg_daily_messages(&self) -> u32 {
        let days = self.days.len() as u32;
        if days == 0 {
            return 0;
        }
        (self.total_messages + days / 2) / days
    }
}
