//! Ranking a candidate list against a query.

use crate::candidate::{sort_matches, Candidate, Match, NAME_FIELD};
use crate::highlight::Highlighter;
use crate::relevance::{score, ScoreResult};
use serde::{Deserialize, Serialize};

/// Default maximum number of results.
pub const DEFAULT_LIMIT: usize = 10;
/// Default minimum score a match needs to be returned.
pub const DEFAULT_MIN_SCORE: u32 = 10;

/// Candidate lists at least this long are scored on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 512;

/// Options for [`rank`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankOptions {
    /// Maximum number of results
    pub limit: usize,
    /// Matches scoring below this are dropped
    pub min_score: u32,
    /// Candidate fields to score; the best one wins
    pub search_fields: Vec<String>,
    /// Markers used for `highlighted_name`
    pub highlighter: Highlighter,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_score: DEFAULT_MIN_SCORE,
            search_fields: vec![NAME_FIELD.to_string()],
            highlighter: Highlighter::default(),
        }
    }
}

impl RankOptions {
    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the minimum score.
    #[must_use]
    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Replace the searched fields.
    #[must_use]
    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the highlight markers.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }
}

/// Rank `candidates` for `query`.
///
/// A blank query lists the first `limit` candidates unchanged with score 0.
/// Otherwise each candidate keeps its best-scoring search field, anything
/// below `min_score` (or not matching at all) is dropped, and the rest are
/// sorted by score descending then by matched field length ascending.
///
/// # Example
/// ```
/// use chapiz_search::{rank, Candidate, RankOptions};
///
/// let breeds = vec![
///     Candidate::new("1", "German Shepherd"),
///     Candidate::new("2", "Persian"),
/// ];
/// let results = rank("germa", &breeds, &RankOptions::default().with_min_score(1));
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].candidate.id, "1");
/// ```
pub fn rank(query: &str, candidates: &[Candidate], options: &RankOptions) -> Vec<Match> {
    if query.trim().is_empty() {
        return candidates
            .iter()
            .take(options.limit)
            .map(|c| Match::unscored(c, 0))
            .collect();
    }

    let mut matches = score_all(query, candidates, options);
    let matched = matches.len();
    sort_matches(&mut matches);
    matches.truncate(options.limit);

    tracing::debug!(
        query,
        candidates = candidates.len(),
        matched,
        returned = matches.len(),
        "Ranked candidates"
    );

    matches
}

fn score_all(query: &str, candidates: &[Candidate], options: &RankOptions) -> Vec<Match> {
    #[cfg(feature = "parallel")]
    {
        if candidates.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            return candidates
                .par_iter()
                .filter_map(|c| best_match(query, c, options))
                .collect();
        }
    }

    candidates
        .iter()
        .filter_map(|c| best_match(query, c, options))
        .collect()
}

/// Score every string field in `search_fields` and keep the best.
fn best_match(query: &str, candidate: &Candidate, options: &RankOptions) -> Option<Match> {
    let mut best: Option<(&String, ScoreResult)> = None;

    for field in &options.search_fields {
        let Some(value) = candidate.field(field) else {
            continue;
        };
        let result = score(query, value);
        let better = match &best {
            Some((_, current)) => result.score > current.score,
            None => true,
        };
        if better {
            best = Some((field, result));
        }
    }

    let (field, result) = best?;
    if !result.is_match() || result.score < options.min_score {
        return None;
    }

    // Only name matches carry highlight markers.
    let highlighted_name = if field == NAME_FIELD {
        options.highlighter.apply(&candidate.name, &result.matched_indices)
    } else {
        candidate.name.clone()
    };

    Some(Match {
        candidate: candidate.clone(),
        score: result.score,
        matched_indices: result.matched_indices,
        highlighted_name,
        field: Some(field.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breeds() -> Vec<Candidate> {
        vec![
            Candidate::new("1", "German Shepherd").with_field("origin", "Germany"),
            Candidate::new("2", "Persian").with_field("origin", "Iran"),
            Candidate::new("3", "Golden Retriever").with_field("origin", "Scotland"),
            Candidate::new("4", "Labrador Retriever").with_field("origin", "Canada"),
            Candidate::new("5", "Maine Coon").with_field("origin", "United States"),
        ]
    }

    #[test]
    fn test_blank_query_lists_verbatim() {
        let results = rank("  ", &breeds(), &RankOptions::default().with_limit(3));
        let ids: Vec<_> = results.iter().map(|m| m.candidate.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(results.iter().all(|m| m.score == 0 && m.matched_indices.is_empty()));
        assert_eq!(results[0].highlighted_name, "German Shepherd");
    }

    #[test]
    fn test_rank_filters_non_matches() {
        let results = rank("germa", &breeds(), &RankOptions::default().with_min_score(1));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidate.id, "1");
        assert_eq!(results[0].score, 90);
        assert_eq!(
            results[0].highlighted_name,
            "<mark>G</mark><mark>e</mark><mark>r</mark><mark>m</mark><mark>a</mark>n Shepherd"
        );
    }

    #[test]
    fn test_rank_no_match() {
        assert!(rank("xyz123nomatch", &breeds(), &RankOptions::default()).is_empty());
    }

    #[test]
    fn test_rank_orders_by_score() {
        // Golden Retriever: offset 7 -> 63, Labrador Retriever: offset 9 -> 61
        let results = rank("retriever", &breeds(), &RankOptions::default());
        let ids: Vec<_> = results.iter().map(|m| m.candidate.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4"]);
        assert_eq!(results[0].score, 63);
        assert_eq!(results[1].score, 61);
    }

    #[test]
    fn test_rank_tie_breaks_on_length() {
        let candidates = vec![
            Candidate::new("long", "Siamese Traditional"),
            Candidate::new("short", "Siamese"),
        ];
        let results = rank("sia", &candidates, &RankOptions::default());
        assert_eq!(results[0].candidate.id, "short");
        assert_eq!(results[1].candidate.id, "long");
    }

    #[test]
    fn test_rank_min_score() {
        let results = rank("retriever", &breeds(), &RankOptions::default().with_min_score(62));
        assert_eq!(results.len(), 1);
        assert!(results.iter().all(|m| m.score >= 62));
    }

    #[test]
    fn test_rank_limit() {
        let results = rank("e", &breeds(), &RankOptions::default().with_limit(2));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_rank_other_field_not_highlighted() {
        let options = RankOptions::default().with_search_fields(["name", "origin"]);
        let results = rank("iran", &breeds(), &options);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidate.id, "2");
        assert_eq!(results[0].field.as_deref(), Some("origin"));
        assert_eq!(results[0].score, 100);
        assert_eq!(results[0].highlighted_name, "Persian");
    }

    #[test]
    fn test_rank_skips_non_string_fields() {
        let candidates = vec![Candidate::new("1", "Bengal").with_field("weight", 5)];
        let options = RankOptions::default().with_search_fields(["weight"]);
        assert!(rank("5", &candidates, &options).is_empty());
    }

    #[test]
    fn test_rank_custom_highlighter() {
        let options = RankOptions::default().with_highlighter(Highlighter::new("[", "]"));
        let results = rank("persian", &breeds(), &options);
        assert_eq!(results[0].highlighted_name, "[P][e][r][s][i][a][n]");
    }

    #[test]
    fn test_rank_zero_min_score_still_drops_non_matches() {
        let candidates = vec![Candidate::new("bengal", "Bengal")];
        let options = RankOptions::default().with_min_score(0);
        assert!(rank("zzz", &candidates, &options).is_empty());
        assert_eq!(rank("bgl", &candidates, &options).len(), 1);
    }

    #[test]
    fn test_large_list_matches_chunked_ranking() {
        let names = ["Bengal", "Birman", "Bombay", "Abyssinian", "Ragdoll", "Siberian", "Burmese"];
        let candidates: Vec<Candidate> = (0..2000)
            .map(|i| Candidate::new(i.to_string(), format!("{} {}", names[i % names.len()], i)))
            .collect();
        let options = RankOptions::default().with_limit(3000).with_min_score(1);

        let ranked = rank("b", &candidates, &options);

        // Chunks stay below the pool threshold; merging them in input order
        // and stable-sorting is the sequential result.
        let mut baseline: Vec<Match> = candidates
            .chunks(256)
            .flat_map(|chunk| rank("b", chunk, &options))
            .collect();
        sort_matches(&mut baseline);

        assert!(ranked.len() > 1000);
        assert_eq!(ranked, baseline);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let options = RankOptions::default();
        assert_eq!(rank("r", &breeds(), &options), rank("r", &breeds(), &options));
    }
}
