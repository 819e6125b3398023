//! Score command

use anyhow::Result;
use chapiz_cli::output::{score_badge, OutputFormat};
use chapiz_search::highlight;
use owo_colors::OwoColorize;
use serde_json::json;

/// Score `query` against `target` and show which characters matched
pub fn run(query: &str, target: &str, format: OutputFormat) -> Result<()> {
    let result = chapiz_search::score(query, target);

    if format == OutputFormat::Json {
        let output = json!({
            "query": query,
            "target": target,
            "score": result.score,
            "kind": result.kind,
            "matchedIndices": result.matched_indices,
            "highlighted": highlight(target, &result.matched_indices),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if result.is_match() {
        println!(
            "{}  {}  {}",
            score_badge(result.score),
            highlight(target, &result.matched_indices),
            format!("{:?}", result.kind).to_lowercase().dimmed()
        );
    } else {
        println!("{}  {}  {}", score_badge(0), target, "no match".dimmed());
    }
    Ok(())
}
