//! Interactive command

use crate::app::App;
use anyhow::Result;
use chapiz_cli::output::{format_count, OutputFormat, Status};
use chapiz_core::debounce::Debouncer;
use chapiz_search::SuggestOptions;
use chapiz_telemetry::{metrics, names};
use serde_json::json;
use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Instant;

/// Read queries from stdin and suggest once typing pauses
///
/// Input that arrives faster than the debounce interval collapses into its
/// last line. Pending input is flushed when stdin closes.
pub fn run(app: &App, limit: Option<usize>) -> Result<()> {
    let mut options = app.suggest_options();
    if let Some(limit) = limit {
        options = options.with_limit(limit);
    }

    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut debouncer = Debouncer::new(app.schema().input.debounce());
    tracing::debug!(interval_ms = debouncer.interval().as_millis(), "Reading queries from stdin");

    loop {
        let received = match debouncer.remaining_at(Instant::now()) {
            Some(wait) => rx.recv_timeout(wait),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(line) => debouncer.submit(line),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(query) = debouncer.cancel() {
                    show(app, &query, &options)?;
                }
                return Ok(());
            }
        }

        if let Some(query) = debouncer.poll() {
            show(app, &query, &options)?;
        }
    }
}

fn show(app: &App, query: &str, options: &SuggestOptions) -> Result<()> {
    let recent = if options.include_recent {
        app.recent.get_recent()
    } else {
        Vec::new()
    };

    let browsing = query.trim().is_empty();
    metrics().increment(if browsing { names::SEARCH_BROWSE } else { names::SEARCH_QUERIES });
    let suggestions = chapiz_search::suggest(query, &app.breeds, &recent, options);

    if app.format == OutputFormat::Json {
        // One line per settled query.
        println!("{}", json!({ "query": query, "matches": suggestions }));
        return Ok(());
    }

    Status::header(&format!(
        "{} for \"{}\"",
        format_count(suggestions.len(), "suggestion", "suggestions"),
        query.trim()
    ));
    super::print_matches(&suggestions, &recent);
    Ok(())
}
