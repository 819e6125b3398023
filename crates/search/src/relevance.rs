//! Relevance scoring between a query and a single target string.

use crate::fuzzy::{fold, subsequence_score};
use serde::{Deserialize, Serialize};

/// Score for a case-insensitive exact match.
pub const EXACT_SCORE: u32 = 100;
/// Score for a case-insensitive prefix match.
pub const PREFIX_SCORE: u32 = 90;
/// Base score for a substring match, reduced by the match offset.
pub const SUBSTRING_BASE: u32 = 70;

/// Which rule produced a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// No match
    #[default]
    None,
    /// Query characters appear in order, not contiguously
    Fuzzy,
    /// Query appears somewhere inside the target
    Substring,
    /// Target starts with the query
    Prefix,
    /// Target equals the query
    Exact,
}

/// Score and matched character offsets for one query/target pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Relevance score (higher is better, 0 means no match)
    pub score: u32,
    /// Strictly increasing char offsets into the target
    pub matched_indices: Vec<usize>,
    /// Rule that produced the score
    pub kind: MatchKind,
}

impl ScoreResult {
    fn new(score: u32, matched_indices: Vec<usize>, kind: MatchKind) -> Self {
        Self { score, matched_indices, kind }
    }

    /// Returns true if the query matched at all.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Calculate the relevance of `target` for `query`.
///
/// Rules are tried in order and the first hit wins: exact, prefix, substring,
/// then ordered subsequence. Comparison ignores case. Offsets are counted in
/// chars, not bytes.
///
/// # Arguments
/// * `query` - The search query (surrounding whitespace is ignored)
/// * `target` - The text to score
///
/// # Example
/// ```
/// use chapiz_search::{score, MatchKind};
///
/// let result = score("retriever", "Golden Retriever");
/// assert_eq!(result.kind, MatchKind::Substring);
/// assert_eq!(result.score, 63);
/// assert_eq!(result.matched_indices, (7..16).collect::<Vec<_>>());
/// ```
pub fn score(query: &str, target: &str) -> ScoreResult {
    let query = fold(query.trim());
    if query.is_empty() {
        return ScoreResult::default();
    }
    let target = fold(target);

    if query == target {
        return ScoreResult::new(EXACT_SCORE, (0..target.len()).collect(), MatchKind::Exact);
    }

    if target.starts_with(&query) {
        return ScoreResult::new(PREFIX_SCORE, (0..query.len()).collect(), MatchKind::Prefix);
    }

    if let Some(offset) = find(&target, &query) {
        // Deep offsets in very long targets still count as a match.
        let penalty = u32::try_from(offset).unwrap_or(u32::MAX);
        let score = SUBSTRING_BASE.saturating_sub(penalty).max(1);
        return ScoreResult::new(score, (offset..offset + query.len()).collect(), MatchKind::Substring);
    }

    match subsequence_score(&query, &target) {
        Some((score, indices)) => ScoreResult::new(score, indices, MatchKind::Fuzzy),
        None => ScoreResult::default(),
    }
}

/// Char offset of the first occurrence of `needle` in `haystack`.
fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let result = score("persian", "Persian");
        assert_eq!(result.score, EXACT_SCORE);
        assert_eq!(result.kind, MatchKind::Exact);
        assert_eq!(result.matched_indices, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_starts_with() {
        let result = score("germa", "German Shepherd");
        assert_eq!(result.score, PREFIX_SCORE);
        assert_eq!(result.matched_indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_contains() {
        let result = score("retriever", "Golden Retriever");
        assert_eq!(result.score, 63);
        assert_eq!(result.kind, MatchKind::Substring);
    }

    #[test]
    fn test_contains_earlier_scores_higher() {
        let early = score("cat", "a cat");
        let late = score("cat", "a large cat");
        assert!(early.score > late.score);
    }

    #[test]
    fn test_contains_clamped() {
        let target = format!("{}siamese", "x".repeat(200));
        let result = score("siamese", &target);
        assert_eq!(result.score, 1);
        assert_eq!(result.kind, MatchKind::Substring);
    }

    #[test]
    fn test_fuzzy() {
        let result = score("mcn", "Maine Coon");
        assert_eq!(result.kind, MatchKind::Fuzzy);
        assert_eq!(result.matched_indices, vec![0, 6, 9]);
        assert!(result.is_match());
    }

    #[test]
    fn test_no_match() {
        let result = score("xyz123nomatch", "Bengal");
        assert_eq!(result, ScoreResult::default());
        assert!(!result.is_match());
    }

    #[test]
    fn test_blank_query() {
        assert_eq!(score("   ", "Bengal").score, 0);
        assert!(score("", "Bengal").matched_indices.is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(score("  bengal ", "Bengal").score, EXACT_SCORE);
    }

    #[test]
    fn test_query_longer_than_target() {
        assert_eq!(score("ragdolls", "Ragdoll").score, 0);
    }

    #[test]
    fn test_unicode_offsets() {
        let result = score("ñ", "Español");
        assert_eq!(result.matched_indices, vec![4]);
    }
}
