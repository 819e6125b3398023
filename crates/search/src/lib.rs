//! Fuzzy autocomplete for Chapiz breed pickers.
//!
//! This crate provides:
//! - Case-insensitive relevance scoring (exact, prefix, substring, subsequence)
//! - Match highlighting
//! - Candidate ranking with per-field scoring
//! - Suggestions that surface and boost recent selections
//! - A namespaced recent-selection store over pluggable key-value storage
//!
//! # Example
//!
//! ```
//! use chapiz_search::{suggest, Candidate, MemoryStore, RecentSelections, SuggestOptions};
//!
//! let breeds = vec![
//!     Candidate::new("bengal", "Bengal"),
//!     Candidate::new("birman", "Birman"),
//! ];
//! let recent = RecentSelections::new(MemoryStore::new(), "recent-cat-breeds");
//! recent.add_recent("birman");
//!
//! let results = suggest("b", &breeds, &recent.get_recent(), &SuggestOptions::default());
//! assert_eq!(results[0].candidate.id, "birman");
//! ```

mod candidate;
mod error;
mod fuzzy;
mod highlight;
mod rank;
mod recent;
mod relevance;
mod store;
mod suggest;

#[cfg(feature = "wasm")]
mod wasm;

pub use candidate::{Candidate, Match, ID_FIELD, NAME_FIELD};
pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::fuzzy_match;
pub use highlight::{highlight, Highlighter, DEFAULT_CLOSE, DEFAULT_OPEN};
pub use rank::{rank, RankOptions, DEFAULT_LIMIT, DEFAULT_MIN_SCORE};
pub use recent::{RecentSelections, DEFAULT_MAX_RECENT};
pub use relevance::{score, MatchKind, ScoreResult, EXACT_SCORE, PREFIX_SCORE, SUBSTRING_BASE};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use suggest::{suggest, SuggestOptions, MAX_RECENT_IN_BROWSE, RECENT_BOOST, RECENT_SCORE};
