//! Subsequence matching over case-folded characters.

/// Points for every query character consumed by the scan.
pub const CHAR_MATCH: i64 = 10;
/// Extra points when a match directly follows the previous one.
pub const CONSECUTIVE_BONUS: i64 = 5;
/// Points for consuming the whole query.
pub const COMPLETION_BONUS: i64 = 20;
/// Targets shorter than this earn the difference as a bonus.
pub const SHORT_TARGET_LENGTH: usize = 50;

/// Fold a character to a single lowercase character.
///
/// Characters whose lowercase form expands to several chars keep only the
/// first one, so offsets into folded text are offsets into the original.
#[inline]
pub(crate) fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Fold a whole string, one output char per input char.
pub(crate) fn fold(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// Greedily consume `query` left to right through `target`.
///
/// Returns the char offsets of each consumed character, or `None` when some
/// query character is never reached.
pub(crate) fn subsequence_indices(query: &[char], target: &[char]) -> Option<Vec<usize>> {
    let mut indices = Vec::with_capacity(query.len());
    let mut remaining = query.iter().peekable();

    for (idx, c) in target.iter().enumerate() {
        match remaining.peek() {
            Some(&&wanted) if wanted == *c => {
                indices.push(idx);
                remaining.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    remaining.peek().is_none().then_some(indices)
}

/// Score a subsequence match.
///
/// Successful matches never score below 1; `None` means no match.
pub(crate) fn subsequence_score(query: &[char], target: &[char]) -> Option<(u32, Vec<usize>)> {
    let indices = subsequence_indices(query, target)?;

    let mut score: i64 = 0;
    let mut previous: Option<usize> = None;
    for &idx in &indices {
        score += CHAR_MATCH;
        if previous.is_some_and(|p| idx == p + 1) {
            score += CONSECUTIVE_BONUS;
        }
        previous = Some(idx);
    }

    score += COMPLETION_BONUS;
    if let (Some(first), Some(last)) = (indices.first(), indices.last()) {
        score -= i64::try_from((last - first) / 2).unwrap_or(i64::MAX);
    }
    score += i64::try_from(SHORT_TARGET_LENGTH.saturating_sub(target.len())).unwrap_or(0);

    let score = u32::try_from(score.max(1)).unwrap_or(u32::MAX);
    Some((score, indices))
}

/// Check if text contains all characters of query in order, ignoring case.
///
/// # Arguments
/// * `text` - Text to search in
/// * `query` - Query characters to find
///
/// # Returns
/// true if all query characters are found in order
pub fn fuzzy_match(text: &str, query: &str) -> bool {
    subsequence_indices(&fold(query), &fold(text)).is_some()
}
