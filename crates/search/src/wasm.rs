//! WASM bindings for the breed picker.
//!
//! Recent IDs are passed in from JavaScript, which owns `localStorage`.

use crate::{Candidate, RankOptions, SuggestOptions};
use wasm_bindgen::prelude::*;

const EMPTY: &str = "[]";

/// Score `target` for `query`.
///
/// # Returns
/// JSON object with `score`, `matchedIndices` and `kind`
#[wasm_bindgen]
pub fn score_json(query: &str, target: &str) -> String {
    serde_json::to_string(&crate::score(query, target)).unwrap_or_else(|_| "{}".to_string())
}

/// Check if text contains a fuzzy match for query.
///
/// Returns true if all characters in query appear in text in order.
#[wasm_bindgen]
pub fn fuzzy_contains(query: &str, text: &str) -> bool {
    crate::fuzzy_match(text, query)
}

/// Wrap the characters at `indices_json` (a JSON array of offsets) in `<mark>`.
#[wasm_bindgen]
pub fn highlight_text(text: &str, indices_json: &str) -> String {
    match serde_json::from_str::<Vec<usize>>(indices_json) {
        Ok(indices) => crate::highlight(text, &indices),
        Err(_) => text.to_string(),
    }
}

/// Rank candidates and return matches as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `candidates_json` - JSON array of `{id, name, ...}` objects
/// * `options_json` - JSON options (`limit`, `minScore`, `searchFields`); empty for defaults
#[wasm_bindgen]
pub fn rank_json(query: &str, candidates_json: &str, options_json: &str) -> String {
    let Ok(candidates) = serde_json::from_str::<Vec<Candidate>>(candidates_json) else {
        return EMPTY.to_string();
    };
    let Some(options) = parse_options::<RankOptions>(options_json) else {
        return EMPTY.to_string();
    };

    let matches = crate::rank(query, &candidates, &options);
    serde_json::to_string(&matches).unwrap_or_else(|_| EMPTY.to_string())
}

/// Build suggestions and return matches as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `candidates_json` - JSON array of `{id, name, ...}` objects
/// * `recent_json` - JSON array of recent IDs, most recent first
/// * `options_json` - JSON options (`limit`, `includeRecent`, `minScore`, `searchFields`)
#[wasm_bindgen]
pub fn suggest_json(query: &str, candidates_json: &str, recent_json: &str, options_json: &str) -> String {
    let Ok(candidates) = serde_json::from_str::<Vec<Candidate>>(candidates_json) else {
        return EMPTY.to_string();
    };
    // Unreadable recents behave like no recents.
    let recent: Vec<String> = serde_json::from_str(recent_json).unwrap_or_default();
    let Some(options) = parse_options::<SuggestOptions>(options_json) else {
        return EMPTY.to_string();
    };

    let matches = crate::suggest(query, &candidates, &recent, &options);
    serde_json::to_string(&matches).unwrap_or_else(|_| EMPTY.to_string())
}

fn parse_options<T: Default + serde::de::DeserializeOwned>(json: &str) -> Option<T> {
    if json.trim().is_empty() {
        return Some(T::default());
    }
    serde_json::from_str(json).ok()
}
