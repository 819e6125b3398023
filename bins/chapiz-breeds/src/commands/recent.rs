//! Recent selection commands

use crate::app::App;
use anyhow::Result;
use chapiz_cli::output::{format_count, OutputFormat, Status};
use chapiz_core::{Error, ResultExt};
use chapiz_telemetry::{metrics, names};
use owo_colors::OwoColorize;
use serde_json::json;

/// List recent selections, most recent first
pub fn list(app: &App) -> Result<()> {
    let ids = app.recent.get_recent();

    if app.format == OutputFormat::Json {
        let entries: Vec<_> = ids
            .iter()
            .map(|id| {
                json!({
                    "id": id,
                    "name": app.find_breed(id).map(|b| b.name.as_str()),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if ids.is_empty() {
        Status::info(&format!("No recent selections in {}", app.recent.namespace()));
        return Ok(());
    }

    Status::header(&format!(
        "{} in {}",
        format_count(ids.len(), "recent selection", "recent selections"),
        app.recent.namespace()
    ));
    for (i, id) in ids.iter().enumerate() {
        match app.find_breed(id) {
            Some(breed) => println!("  {:>2}. {} {}", i + 1, breed.name, format!("({id})").dimmed()),
            None => println!("  {:>2}. {} {}", i + 1, id, "(not in breed list)".yellow()),
        }
    }
    Ok(())
}

/// Record a confirmed selection
pub fn add(app: &App, id: &str) -> Result<()> {
    let breed = app.find_breed(id).ok_or_else(|| {
        Error::unknown_candidate(id)
            .with_suggestion("Run `chapiz-breeds rank <query>` to find valid breed IDs")
    });
    let breed = breed.context(format!("Adding to {}", app.recent.namespace()))?;

    app.recent.add_recent(&breed.id);
    metrics().increment(names::RECENT_ADDED);

    if app.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&app.recent.get_recent())?);
    } else {
        Status::success(&format!("Recorded {} as a recent selection", breed.name));
    }
    Ok(())
}

/// Forget all recent selections
pub fn clear(app: &App) -> Result<()> {
    app.recent.clear_recent();

    if app.format == OutputFormat::Json {
        println!("{}", json!({ "cleared": app.recent.namespace() }));
    } else {
        Status::success(&format!("Cleared recent selections in {}", app.recent.namespace()));
    }
    Ok(())
}
