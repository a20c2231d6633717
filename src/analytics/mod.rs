//! Aggregation of classified events into the seven-day activity report.
//!
//! [`analyze`] is the engine entry point. It makes two passes over the
//! transcript: the first derives the reporting window from every line's
//! leading date token, the second parses each line, classifies its
//! content, and folds the events into a [`WindowAggregator`]. The window
//! must be fully known before any event can be placed inside or outside
//! it, so the passes cannot be fused.

use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::{debug, instrument, trace};

use crate::classify::classify;
use crate::error::Result;
use crate::model::{
    AnalysisResult, ClassifiedEvent, ConsistentUser, DateRange, DayStats, ParsedMessage,
    UserActivity,
};
use crate::parser::TranscriptParser;
use crate::window::{day_key, ReportWindow};

/// Minimum distinct active days for a user to count as consistent.
pub const CONSISTENCY_THRESHOLD: u32 = 4;

/// Accumulates classified events for one reporting window.
#[derive(Debug)]
pub struct WindowAggregator {
    window: ReportWindow,
    days: IndexMap<NaiveDate, DayStats>,
    user_days: UserActivity,
    total_messages: u32,
    total_joins: u32,
}

impl WindowAggregator {
    /// Create an empty aggregator for the given window.
    #[must_use]
    pub fn new(window: ReportWindow) -> Self {
        Self {
            window,
            days: IndexMap::new(),
            user_days: UserActivity::default(),
            total_messages: 0,
            total_joins: 0,
        }
    }

    /// Fold one parsed message into the window.
    ///
    /// Messages dated outside the window are dropped before
    /// classification; their content is never inspected.
    pub fn process_message(&mut self, msg: &ParsedMessage) {
        if !self.window.contains(msg.date) {
            trace!(date = %msg.date, "message outside reporting window");
            return;
        }

        match classify(&msg.content) {
            ClassifiedEvent::Join => {
                self.day_mut(msg.date).new_users += 1;
                self.total_joins += 1;
            }
            ClassifiedEvent::System | ClassifiedEvent::Noise => {}
            ClassifiedEvent::Message { sender, .. } => {
                let day = self.day_mut(msg.date);
                day.active_users.insert(sender.clone());
                day.messages += 1;
                let key = day.day_key.clone();
                self.total_messages += 1;
                self.user_days.entry(sender).or_default().insert(key);
            }
        }
    }

    fn day_mut(&mut self, date: NaiveDate) -> &mut DayStats {
        self.days
            .entry(date)
            .or_insert_with(|| DayStats::new(date, day_key(date)))
    }

    /// Consume the aggregator and materialize the final result.
    ///
    /// Every day of the window appears in the output, zero-filled when no
    /// event touched it, oldest first.
    #[must_use]
    pub fn finish(self) -> AnalysisResult {
        let Self {
            window,
            days: mut buckets,
            user_days,
            total_messages,
            total_joins,
        } = self;

        let days = window
            .days()
            .into_iter()
            .map(|date| {
                buckets
                    .swap_remove(&date)
                    .unwrap_or_else(|| DayStats::new(date, day_key(date)))
            })
            .collect();

        let total_users = user_days.len() as u32;
        let consistent_users = consistent_users(&user_days);

        AnalysisResult {
            days,
            consistent_users,
            total_users,
            total_messages,
            total_joins,
            date_range: DateRange {
                start: day_key(window.start()),
                end: day_key(window.latest()),
            },
        }
    }
}

/// Users active on at least [`CONSISTENCY_THRESHOLD`] distinct days.
///
/// Sorted by active-day count descending, then name ascending so ties
/// render in a stable order.
#[must_use]
pub fn consistent_users(activity: &UserActivity) -> Vec<ConsistentUser> {
    let mut users: Vec<ConsistentUser> = activity
        .iter()
        .filter(|(_, days)| days.len() >= CONSISTENCY_THRESHOLD as usize)
        .map(|(name, days)| ConsistentUser {
            name: name.clone(),
            active_days: days.len() as u32,
            // Keys sort as strings, so "Jan 10" lands before "Jan 2".
            days_active: days.iter().cloned().collect(),
        })
        .collect();

    users.sort_by(|a, b| {
        b.active_days
            .cmp(&a.active_days)
            .then_with(|| a.name.cmp(&b.name))
    });
    users
}

/// Run the full analysis over transcript text.
///
/// # Errors
///
/// Returns [`NoValidMessages`](crate::error::PulseError::NoValidMessages)
/// when no line carries a leading date token. Malformed lines inside an
/// otherwise valid transcript are skipped, never fatal.
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn analyze(text: &str) -> Result<AnalysisResult> {
    let window = ReportWindow::from_text(text)?;
    debug!(start = %window.start(), latest = %window.latest(), "resolved reporting window");

    let mut parser = TranscriptParser::new();
    let mut aggregator = WindowAggregator::new(window);
    for line in text.lines() {
        if let Some(msg) = parser.parse_line(line) {
            aggregator.process_message(&msg);
        }
    }

    let stats = parser.stats();
    debug!(
        lines = stats.lines_seen,
        messages = stats.messages_parsed,
        skipped = stats.lines_skipped,
        "transcript parsed"
    );

    Ok(aggregator.finish())
}
