//! Rank command

use crate::app::App;
use anyhow::Result;
use chapiz_cli::output::{format_count, format_duration, OutputFormat, Status};
use chapiz_telemetry::{metrics, names, Timer};

/// Rank the breed list against `query`
pub fn run(
    app: &App,
    query: &str,
    limit: Option<usize>,
    min_score: Option<u32>,
    fields: &[String],
) -> Result<()> {
    let mut options = app.rank_options();
    if let Some(limit) = limit {
        options = options.with_limit(limit);
    }
    if let Some(min_score) = min_score {
        options = options.with_min_score(min_score);
    }
    if !fields.is_empty() {
        options = options.with_search_fields(fields.iter().cloned());
    }

    metrics().increment(names::SEARCH_QUERIES);
    let timer = Timer::start(names::SEARCH_DURATION_MS);
    let matches = chapiz_search::rank(query, &app.breeds, &options);
    let elapsed = timer.stop();
    metrics().histogram(names::SEARCH_RESULTS, matches.len() as f64);

    if app.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        Status::info(&format!("No breeds match \"{query}\""));
        return Ok(());
    }

    Status::header(&format!(
        "{} for \"{}\" ({})",
        format_count(matches.len(), "match", "matches"),
        query.trim(),
        format_duration(elapsed)
    ));
    super::print_matches(&matches, &[]);
    Ok(())
}
