//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use chapiz_core::Error;
use owo_colors::OwoColorize;
use std::fmt;
use std::str::FromStr;

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Print an error in the selected format
///
/// JSON errors go to stdout as an error report so scripts can parse them.
pub fn report_error(error: &Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&error.to_report()) {
            Ok(json) => println!("{json}"),
            Err(_) => Status::error(&error.to_string()),
        },
        OutputFormat::Text => Status::error(&error.to_string()),
    }
}

/// Format a score as a fixed-width, colored badge
pub fn score_badge(score: u32) -> String {
    let text = format!("{score:>3}");
    match score {
        90.. => text.green().bold().to_string(),
        50..=89 => text.yellow().to_string(),
        _ => text.dimmed().to_string(),
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.1}ms", duration.as_secs_f64() * 1000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
