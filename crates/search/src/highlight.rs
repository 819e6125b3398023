//! Marking matched characters for display.

use serde::{Deserialize, Serialize};

/// Default opening marker.
pub const DEFAULT_OPEN: &str = "<mark>";
/// Default closing marker.
pub const DEFAULT_CLOSE: &str = "</mark>";

/// Wraps matched characters in open/close markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlighter {
    /// Inserted before each matched character
    pub open: String,
    /// Inserted after each matched character
    pub close: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN, DEFAULT_CLOSE)
    }
}

impl Highlighter {
    /// Creates a highlighter with custom markers.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Wrap every char whose offset is in `indices`.
    ///
    /// `indices` are char offsets in strictly increasing order, as produced by
    /// [`score`](crate::score). Offsets past the end are ignored. Casing and
    /// unmatched characters pass through untouched.
    pub fn apply(&self, text: &str, indices: &[usize]) -> String {
        if indices.is_empty() {
            return text.to_string();
        }

        let extra = indices.len() * (self.open.len() + self.close.len());
        let mut out = String::with_capacity(text.len() + extra);
        let mut pending = indices.iter().copied().peekable();

        for (idx, c) in text.chars().enumerate() {
            // Skip anything the caller passed out of order.
            while pending.next_if(|&i| i < idx).is_some() {}

            if pending.next_if_eq(&idx).is_some() {
                out.push_str(&self.open);
                out.push(c);
                out.push_str(&self.close);
            } else {
                out.push(c);
            }
        }

        out
    }
}

/// Highlight with the default `<mark>` markers.
pub fn highlight(text: &str, indices: &[usize]) -> String {
    Highlighter::default().apply(text, indices)
}
