//! Command-line interface for chat-pulse.
//!
//! A single-purpose command: read a transcript, analyze it, render the
//! report. Flag values layer over config file defaults, which layer over
//! built-in defaults.

use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

use crate::analytics::analyze;
use crate::config::Config;
use crate::error::{PulseError, Result};
use crate::report::{self, ReportFormat, ReportOptions};

/// Group activity reports from exported chat transcripts.
#[derive(Debug, Parser)]
#[command(name = "pulse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Transcript file to analyze ("-" reads from stdin).
    #[arg(value_name = "FILE", required_unless_present = "completions")]
    pub file: Option<PathBuf>,

    /// Output format for the report.
    #[arg(short = 'o', long, default_value = "text", env = "PULSE_OUTPUT")]
    pub output: OutputFormat,

    /// Output as JSON (shorthand for -o json).
    #[arg(long, env = "PULSE_JSON")]
    pub json: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Omit the daily activity bar chart.
    #[arg(long)]
    pub no_chart: bool,

    /// Enable colored output (auto-detected by default).
    #[arg(long, env = "PULSE_COLOR")]
    pub color: Option<bool>,

    /// Use ASCII-only characters (no Unicode bars).
    #[arg(long, env = "PULSE_ASCII")]
    pub ascii: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn", env = "PULSE_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format (text, json, compact, pretty).
    #[arg(long, default_value = "text", env = "PULSE_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Path to custom configuration file.
    #[arg(long, env = "PULSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generate shell completions and exit.
    #[arg(long, value_enum)]
    pub completions: Option<CompletionShell>,
}

/// Log level options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Errors, warnings, and informational messages.
    Info,
    /// All of the above plus debug messages.
    Debug,
    /// All messages including trace-level details.
    Trace,
}

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// Structured JSON format for machine consumption.
    Json,
    /// Compact single-line format.
    Compact,
    /// Pretty format with full details.
    Pretty,
}

impl LogLevel {
    /// Convert to tracing filter level.
    #[must_use]
    pub fn to_filter_string(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl Cli {
    /// Get effective output format.
    #[must_use]
    pub fn effective_output(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.output
        }
    }
}

/// Output format for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// Tab-separated values.
    Tsv,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
            OutputFormat::Tsv => Self::Tsv,
        }
    }
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    Powershell,
    /// Elvish shell.
    Elvish,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::Powershell => Shell::PowerShell,
            CompletionShell::Elvish => Shell::Elvish,
        }
    }
}

/// Generate shell completions and print to stdout.
pub fn generate_completions(shell: CompletionShell) {
    let mut cmd = Cli::command();
    let shell: Shell = shell.into();
    generate(shell, &mut cmd, "pulse", &mut io::stdout());
}

/// Initialize tracing/logging based on CLI options.
fn init_logging(cli: &Cli) {
    use tracing_subscriber::{
        fmt::{self, format::FmtSpan},
        layer::SubscriberExt,
        util::SubscriberInitExt,
        EnvFilter,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_string()));

    // Build subscriber based on log format
    let result = match cli.log_format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    };

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
}

/// Run the CLI application.
///
/// # Errors
///
/// Returns any error from reading input, analyzing the transcript, or
/// rendering the report. [`PulseError::exit_code`] maps each variant to
/// the process exit status.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    // An explicit --config that fails to load is a hard error; the
    // implicit default path degrades to defaults with a warning.
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_for_project(Path::new(".")).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config: {e}");
            Config::default()
        }),
    };

    let Some(file) = &cli.file else {
        return Err(PulseError::usage("missing transcript FILE argument"));
    };

    let text = read_input(file)?;
    let result = analyze(&text)?;

    let options = ReportOptions {
        color: cli
            .color
            .unwrap_or_else(|| config.theme.color && io::stdout().is_terminal()),
        unicode: !cli.ascii && config.theme.unicode,
        chart: !cli.no_chart && config.report.chart,
        chart_width: config.report.chart_width,
        pretty_json: cli.pretty || config.report.pretty_json,
    };

    let stdout = io::stdout();
    let mut writer = io::BufWriter::new(stdout.lock());
    report::render(&result, cli.effective_output().into(), &mut writer, &options)?;
    writer
        .flush()
        .map_err(|e| PulseError::io("Failed to flush stdout", e))?;

    Ok(())
}

/// Read the transcript from a file or stdin.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| PulseError::io("Failed to read from stdin", e))?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PulseError::FileNotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => PulseError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => PulseError::io(format!("Failed to read transcript: {}", path.display()), e),
    })
}
