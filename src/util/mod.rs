//! Shared helpers for file writes and report formatting.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{PulseError, Result};

/// Atomically write content to a file.
///
/// This function ensures data integrity by:
/// 1. Writing to a temporary file in the same directory
/// 2. Syncing the data to disk
/// 3. Atomically renaming the temp file to the target path
///
/// If any step fails, the original file (if it exists) remains unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be determined or created
/// - The temporary file cannot be created or written
/// - The atomic rename (persist) operation fails
///
/// # Example
///
/// ```rust,no_run
/// use chat_pulse::util::atomic_write;
///
/// atomic_write("config.toml", b"key = \"value\"").unwrap();
/// ```
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let parent = path.parent().ok_or_else(|| PulseError::IoError {
        context: format!("Cannot determine parent directory for: {}", path.display()),
        source: io::Error::new(io::ErrorKind::InvalidInput, "No parent directory"),
    })?;

    if !parent.exists() {
        std::fs::create_dir_all(parent).map_err(|e| {
            PulseError::io(
                format!("Failed to create directory: {}", parent.display()),
                e,
            )
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| {
        PulseError::io(
            format!("Failed to create temporary file in: {}", parent.display()),
            e,
        )
    })?;

    temp_file.write_all(content).map_err(|e| {
        PulseError::io(
            format!("Failed to write to temporary file for: {}", path.display()),
            e,
        )
    })?;

    temp_file.flush().map_err(|e| {
        PulseError::io(
            format!("Failed to flush temporary file for: {}", path.display()),
            e,
        )
    })?;

    temp_file.persist(path).map_err(|e| {
        PulseError::io(
            format!("Failed to atomically write file: {}", path.display()),
            e.error,
        )
    })?;

    Ok(())
}

/// Render a horizontal bar chart cell scaled to `width` characters.
///
/// `value` is scaled against `max`; a zero `max` yields an all-empty bar.
///
/// # Example
///
/// ```rust
/// use chat_pulse::util::scaled_bar;
///
/// assert_eq!(scaled_bar(5, 10, 10, false), "#####-----");
/// ```
#[must_use]
pub fn scaled_bar(value: usize, max: usize, width: usize, unicode: bool) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value as f64 / max as f64) * width as f64) as usize
    };
    let filled = filled.min(width);

    let (fill, empty) = if unicode { ("█", "░") } else { ("#", "-") };
    format!("{}{}", fill.repeat(filled), empty.repeat(width - filled))
}
