//! Suggestions that favour recently selected candidates.

use crate::candidate::{sort_matches, Candidate, Match, NAME_FIELD};
use crate::highlight::Highlighter;
use crate::rank::{rank, RankOptions, DEFAULT_LIMIT, DEFAULT_MIN_SCORE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Most recent selections shown ahead of the rest when nothing is typed.
pub const MAX_RECENT_IN_BROWSE: usize = 3;
/// Synthetic score for recents listed in browse mode.
pub const RECENT_SCORE: u32 = 100;
/// Added to the score of recent candidates that match a query.
pub const RECENT_BOOST: u32 = 15;

/// Options for [`suggest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestOptions {
    /// Maximum number of results
    pub limit: usize,
    /// Whether recent selections are surfaced and boosted
    pub include_recent: bool,
    /// Matches scoring below this are dropped
    pub min_score: u32,
    /// Candidate fields to score
    pub search_fields: Vec<String>,
    /// Markers used for `highlighted_name`
    pub highlighter: Highlighter,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            include_recent: true,
            min_score: DEFAULT_MIN_SCORE,
            search_fields: vec![NAME_FIELD.to_string()],
            highlighter: Highlighter::default(),
        }
    }
}

impl SuggestOptions {
    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enable or disable recent handling.
    #[must_use]
    pub fn with_include_recent(mut self, include_recent: bool) -> Self {
        self.include_recent = include_recent;
        self
    }

    /// Set the minimum score.
    #[must_use]
    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    /// The equivalent options for a plain [`rank`] call.
    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            limit: self.limit,
            min_score: self.min_score,
            search_fields: self.search_fields.clone(),
            highlighter: self.highlighter.clone(),
        }
    }
}

impl From<RankOptions> for SuggestOptions {
    fn from(options: RankOptions) -> Self {
        Self {
            limit: options.limit,
            include_recent: true,
            min_score: options.min_score,
            search_fields: options.search_fields,
            highlighter: options.highlighter,
        }
    }
}

/// Build autocomplete suggestions for `query`.
///
/// With a blank query and recent IDs available this is browse mode: up to
/// [`MAX_RECENT_IN_BROWSE`] recent candidates (in `recent_ids` order, score
/// [`RECENT_SCORE`]) followed by the remaining candidates in input order with
/// score 0. Nothing is scored in browse mode.
///
/// Otherwise the query is ranked with [`rank`] and recent candidates gain
/// [`RECENT_BOOST`] before the results are re-sorted.
///
/// # Example
/// ```
/// use chapiz_search::{suggest, Candidate, SuggestOptions};
///
/// let breeds = vec![Candidate::new("a", "Labrador"), Candidate::new("b", "Poodle")];
/// let results = suggest("", &breeds, &["b"], &SuggestOptions::default().with_limit(5));
///
/// assert_eq!(results[0].candidate.id, "b");
/// assert_eq!(results[0].score, 100);
/// assert_eq!(results[1].candidate.id, "a");
/// assert_eq!(results[1].score, 0);
/// ```
pub fn suggest<S: AsRef<str>>(
    query: &str,
    candidates: &[Candidate],
    recent_ids: &[S],
    options: &SuggestOptions,
) -> Vec<Match> {
    let use_recent = options.include_recent && !recent_ids.is_empty();

    if use_recent && query.trim().is_empty() {
        return browse(candidates, recent_ids, options.limit);
    }

    let mut matches = rank(query, candidates, &options.rank_options());

    if use_recent {
        let recent: HashSet<&str> = recent_ids.iter().map(AsRef::as_ref).collect();
        let mut boosted = 0usize;
        for m in &mut matches {
            if recent.contains(m.candidate.id.as_str()) {
                m.score = m.score.saturating_add(RECENT_BOOST);
                boosted += 1;
            }
        }
        if boosted > 0 {
            sort_matches(&mut matches);
        }
        tracing::debug!(boosted, "Applied recent boost");
    }

    matches
}

fn browse<S: AsRef<str>>(candidates: &[Candidate], recent_ids: &[S], limit: usize) -> Vec<Match> {
    let recent_cap = MAX_RECENT_IN_BROWSE.min(limit);
    let mut results = Vec::with_capacity(limit.min(candidates.len()));
    let mut shown: HashSet<&str> = HashSet::new();

    for id in recent_ids.iter().map(AsRef::as_ref) {
        if results.len() >= recent_cap {
            break;
        }
        if shown.contains(id) {
            continue;
        }
        if let Some(candidate) = candidates.iter().find(|c| c.id == id) {
            results.push(Match::unscored(candidate, RECENT_SCORE));
            shown.insert(candidate.id.as_str());
        }
    }

    let recent_count = results.len();
    for candidate in candidates {
        if results.len() >= limit {
            break;
        }
        if !shown.contains(candidate.id.as_str()) {
            results.push(Match::unscored(candidate, 0));
        }
    }

    tracing::debug!(recent = recent_count, total = results.len(), "Built browse suggestions");
    results
}
