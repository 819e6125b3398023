//! Suggest command

use crate::app::App;
use anyhow::Result;
use chapiz_cli::output::{format_count, OutputFormat, Status};
use chapiz_telemetry::{metrics, names, Timer};

/// Suggest breeds for `query`, surfacing recent selections
pub fn run(app: &App, query: &str, limit: Option<usize>, include_recent: bool) -> Result<()> {
    let mut options = app.suggest_options();
    if let Some(limit) = limit {
        options = options.with_limit(limit);
    }
    if !include_recent {
        options = options.with_include_recent(false);
    }

    let recent = if options.include_recent {
        app.recent.get_recent()
    } else {
        Vec::new()
    };

    let browsing = query.trim().is_empty();
    metrics().increment(if browsing { names::SEARCH_BROWSE } else { names::SEARCH_QUERIES });

    let timer = Timer::start(names::SEARCH_DURATION_MS);
    let suggestions = chapiz_search::suggest(query, &app.breeds, &recent, &options);
    drop(timer);
    metrics().histogram(names::SEARCH_RESULTS, suggestions.len() as f64);

    if app.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        Status::info(&format!("No breeds match \"{}\"", query.trim()));
        return Ok(());
    }

    let title = if browsing {
        format!("Browsing {}", format_count(suggestions.len(), "breed", "breeds"))
    } else {
        format!(
            "{} for \"{}\"",
            format_count(suggestions.len(), "suggestion", "suggestions"),
            query.trim()
        )
    };
    Status::header(&title);
    super::print_matches(&suggestions, &recent);
    Ok(())
}
