//! chat-pulse: group activity reports from exported chat transcripts.
//!
//! Reads a plain-text chat export, aggregates the last seven days of
//! activity, and prints a summary report to stdout.

use std::process::ExitCode;

use chat_pulse::cli;

fn main() -> ExitCode {
    // Run the CLI (logging is initialized by cli::run based on --log-level and --log-format)
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error message
            eprintln!("Error: {e}");

            // Print cause chain in debug mode
            if std::env::var("RUST_BACKTRACE").is_ok() {
                if let Some(source) = std::error::Error::source(&e) {
                    eprintln!("Caused by: {source}");
                }
            }

            // Return appropriate exit code
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
