//! Searchable items and ranked results.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Reverse;

/// Field name of [`Candidate::id`].
pub const ID_FIELD: &str = "id";
/// Field name of [`Candidate::name`].
pub const NAME_FIELD: &str = "name";

/// A searchable item with a stable ID and display name.
///
/// Any other JSON fields are kept in `extra` and can be searched by name.
///
/// # Example
/// ```
/// use chapiz_search::Candidate;
///
/// let breed: Candidate = serde_json::from_str(
///     r#"{"id": "abyssinian", "name": "Abyssinian", "origin": "Ethiopia"}"#,
/// ).unwrap();
/// assert_eq!(breed.field("origin"), Some("Ethiopia"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Additional named fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Candidate {
    /// Creates a candidate with no extra fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Adds an extra field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Looks up a field by name.
    ///
    /// Returns `None` for missing fields and for fields that are not strings.
    pub fn field(&self, field: &str) -> Option<&str> {
        match field {
            ID_FIELD => Some(&self.id),
            NAME_FIELD => Some(&self.name),
            other => self.extra.get(other).and_then(Value::as_str),
        }
    }
}

/// One candidate scored against a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// The matched candidate
    pub candidate: Candidate,
    /// Relevance score (higher is better)
    pub score: u32,
    /// Char offsets of matched characters in the matched field
    pub matched_indices: Vec<usize>,
    /// Display name with matched characters wrapped in markers
    pub highlighted_name: String,
    /// Search field that produced the score, if any scoring happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Match {
    /// A match that lists the candidate as-is with a fixed score.
    pub(crate) fn unscored(candidate: &Candidate, score: u32) -> Self {
        Self {
            candidate: candidate.clone(),
            score,
            matched_indices: Vec::new(),
            highlighted_name: candidate.name.clone(),
            field: None,
        }
    }

    /// Char length of the field the score came from.
    pub fn matched_len(&self) -> usize {
        self.field
            .as_deref()
            .and_then(|f| self.candidate.field(f))
            .unwrap_or(&self.candidate.name)
            .chars()
            .count()
    }
}

/// Sort by score descending, then shorter matched field first.
///
/// The sort is stable so complete ties keep their input order.
pub(crate) fn sort_matches(matches: &mut [Match]) {
    matches.sort_by_cached_key(|m| (Reverse(m.score), m.matched_len()));
}
