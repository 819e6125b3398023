//! CLI command implementations

pub mod config;
pub mod interactive;
pub mod rank;
pub mod recent;
pub mod score;
pub mod suggest;

use chapiz_cli::output::score_badge;
use chapiz_search::Match;
use owo_colors::OwoColorize;

/// Print ranked matches as a numbered list
pub(crate) fn print_matches(matches: &[Match], recent: &[String]) {
    for (i, m) in matches.iter().enumerate() {
        let marker = if recent.iter().any(|id| *id == m.candidate.id) {
            format!(" {}", "recent".cyan())
        } else {
            String::new()
        };
        let via = match m.field.as_deref() {
            Some(field) if field != chapiz_search::NAME_FIELD => {
                format!(" via {}", field).dimmed().to_string()
            }
            _ => String::new(),
        };
        println!(
            "  {:>2}. {}  {} {}{}{}",
            i + 1,
            score_badge(m.score),
            m.highlighted_name,
            format!("({})", m.candidate.id).dimmed(),
            via,
            marker
        );
    }
}
