//! chat-pulse: group activity reports from exported chat transcripts.
//!
//! This crate parses plain-text chat exports (one line per message or
//! system event), aggregates the last seven days of activity, and renders
//! a summary report.
//!
//! # Features
//!
//! - **Lenient parsing**: malformed lines are skipped, never fatal
//! - **Seven-day window**: anchored to the latest date seen anywhere in
//!   the input, zero-filled for quiet days
//! - **Event classification**: joins, system events, and user messages
//! - **Deterministic output**: identical input produces byte-identical
//!   reports in every format
//!
//! # Quick Start
//!
//! ```rust
//! let transcript = "\
//! 1/1/24, 9:00 AM - Alice: hi
//! 1/1/24, 9:05 AM - Bob: hey
//! 1/2/24, 10:01 AM - Carol joined using this group's invite link";
//!
//! let result = chat_pulse::analyze(transcript)?;
//!
//! assert_eq!(result.days.len(), 7);
//! assert_eq!(result.total_users, 2);
//! assert_eq!(result.total_joins, 1);
//! # Ok::<(), chat_pulse::PulseError>(())
//! ```
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`model`]: Core data structures for events, day buckets, and results
//! - [`window`]: Date token resolution and the seven-day reporting window
//! - [`parser`]: Lenient line-oriented transcript parsing
//! - [`classify`]: Event classification rules
//! - [`analytics`]: Aggregation into the final report
//! - [`report`]: Output rendering (text, JSON, TSV)
//! - [`cli`]: Command-line interface
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`util`]: Atomic file writes and shared helpers

#![doc(html_root_url = "https://docs.rs/chat-pulse/0.1.0")]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analytics;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod util;
pub mod window;

// Re-export commonly used types at the crate root
pub use analytics::analyze;
pub use error::{PulseError, Result};
pub use model::AnalysisResult;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytics::{analyze, WindowAggregator};
    pub use crate::error::{PulseError, Result};
    pub use crate::model::{AnalysisResult, ClassifiedEvent, DayStats, ParsedMessage};
    pub use crate::parser::TranscriptParser;
    pub use crate::report::{Renderer, ReportFormat, ReportOptions};
    pub use crate::window::ReportWindow;
}
