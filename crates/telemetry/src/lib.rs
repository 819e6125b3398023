//! Logging and lightweight metrics for the Chapiz tools
//!
//! - Structured logging with `tracing`, to stderr and optionally a daily log file
//! - A process-wide metrics registry (counters, gauges, histograms)
//! - Timers that feed the registry

mod metrics;
mod timer;

pub use metrics::{metrics, HistogramStats, MetricsRegistry};
pub use timer::Timer;

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Keeps the file writer flushing for the life of the process
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Metric names recorded by the search front ends
pub mod names {
    /// Counter: ranked queries
    pub const SEARCH_QUERIES: &str = "search.queries";
    /// Counter: browse-mode suggestion requests
    pub const SEARCH_BROWSE: &str = "search.browse";
    /// Histogram: results returned per query
    pub const SEARCH_RESULTS: &str = "search.results";
    /// Histogram: ranking time in milliseconds
    pub const SEARCH_DURATION_MS: &str = "search.duration_ms";
    /// Counter: recorded recent selections
    pub const RECENT_ADDED: &str = "recent.added";
}

/// Initialize logging with default settings
pub fn init() -> anyhow::Result<()> {
    init_with_config(TelemetryConfig::default())
}

/// Initialize logging with custom configuration
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target)
        .with_thread_ids(config.show_thread_ids)
        .with_file(config.show_file)
        .with_line_number(config.show_line_number)
        .compact();

    let file_layer = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "chapiz.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            // A second init keeps the first guard; the new one flushes on drop.
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().json().with_writer(writer))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub show_target: bool,
    pub show_thread_ids: bool,
    pub show_file: bool,
    pub show_line_number: bool,
    /// Also write JSON logs to a daily file in this directory
    pub log_dir: Option<PathBuf>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            show_target: false,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            log_dir: None,
        }
    }
}

impl TelemetryConfig {
    /// Settings for a CLI run: quiet unless `verbose`
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        if verbose {
            Self {
                log_level: "chapiz_breeds=debug,chapiz_search=debug,chapiz_core=debug".to_string(),
                show_target: true,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }

    /// Write JSON logs to `dir` as well
    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}
