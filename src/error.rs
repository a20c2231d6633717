//! Error types for chat-pulse.
//!
//! This module provides comprehensive error handling following the thiserror pattern.
//! Error types are designed to be informative, actionable, and suitable for both
//! programmatic handling and user-facing display.
//!
//! The analysis engine itself has a single failure mode
//! ([`PulseError::NoValidMessages`]); every other variant belongs to the
//! surrounding CLI shell (file access, configuration, rendering).

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for chat-pulse operations.
#[derive(Error, Debug)]
pub enum PulseError {
    /// No line in the transcript carried a resolvable date.
    ///
    /// Malformed individual lines are skipped silently; this fires only when
    /// the *entire* input yields zero calendar dates.
    #[error("No valid messages found in transcript")]
    NoValidMessages,

    /// Transcript file not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Permission denied when accessing the transcript file.
    #[error("Permission denied: {}", path.display())]
    PermissionDenied {
        /// Path where access was denied.
        path: PathBuf,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Human-readable error message.
        message: String,
    },

    /// Report rendering failed.
    #[error("Report rendering failed: {message}")]
    ReportError {
        /// Human-readable error message.
        message: String,
    },

    /// Invalid command-line usage.
    #[error("Invalid usage: {message}")]
    Usage {
        /// Human-readable error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {context}")]
    IoError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {context}")]
    SerializationError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },
}

impl PulseError {
    /// Create a new I/O error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            context: context.into(),
            source,
        }
    }

    /// Create a new report rendering error.
    #[must_use]
    pub fn report(message: impl Into<String>) -> Self {
        Self::ReportError {
            message: message.into(),
        }
    }

    /// Create a new usage error.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NoValidMessages => exit_codes::EXIT_DATA_ERROR,
            Self::FileNotFound { .. } => exit_codes::EXIT_FILE_NOT_FOUND,
            Self::PermissionDenied { .. } => exit_codes::EXIT_PERMISSION_DENIED,
            Self::InvalidConfig { .. } => exit_codes::EXIT_CONFIG_ERROR,
            Self::ReportError { .. } => exit_codes::EXIT_REPORT_ERROR,
            Self::Usage { .. } => exit_codes::EXIT_USAGE_ERROR,
            Self::IoError { .. } => exit_codes::EXIT_IO_ERROR,
            Self::SerializationError { .. } => exit_codes::EXIT_GENERAL_ERROR,
        }
    }
}

/// Result type alias for chat-pulse operations.
pub type Result<T> = std::result::Result<T, PulseError>;

impl From<std::io::Error> for PulseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            context: "I/O operation failed".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            context: "JSON operation failed".to_string(),
            source: err,
        }
    }
}

/// Exit codes for CLI operations.
pub mod exit_codes {
    /// Operation completed successfully.
    pub const EXIT_SUCCESS: i32 = 0;
    /// General/unspecified error.
    pub const EXIT_GENERAL_ERROR: i32 = 1;
    /// Specified file not found.
    pub const EXIT_FILE_NOT_FOUND: i32 = 3;
    /// Insufficient permissions.
    pub const EXIT_PERMISSION_DENIED: i32 = 4;
    /// Invalid configuration.
    pub const EXIT_CONFIG_ERROR: i32 = 5;
    /// Report rendering failed.
    pub const EXIT_REPORT_ERROR: i32 = 6;
    /// Invalid command-line usage (BSD standard).
    pub const EXIT_USAGE_ERROR: i32 = 64;
    /// Input data format error (BSD standard).
    pub const EXIT_DATA_ERROR: i32 = 65;
    /// I/O error (BSD standard).
    pub const EXIT_IO_ERROR: i32 = 74;
}
