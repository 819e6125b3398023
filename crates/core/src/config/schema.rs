//! Configuration schema definitions
//!
//! Every section and key is optional; missing values take the defaults below.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub recent: RecentConfig,

    #[serde(default)]
    pub highlight: HighlightConfig,

    #[serde(default)]
    pub input: InputConfig,
}

impl ConfigSchema {
    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.search.limit == 0 {
            return Err(Error::config_invalid("search.limit", "must be at least 1"));
        }
        if self.search.search_fields.is_empty() {
            return Err(Error::config_invalid("search.search_fields", "must name at least one field"));
        }
        if self.search.search_fields.iter().any(|f| f.trim().is_empty()) {
            return Err(Error::config_invalid("search.search_fields", "field names must not be blank"));
        }
        if self.recent.max_items == 0 {
            return Err(Error::config_invalid("recent.max_items", "must be at least 1"));
        }
        if self.recent.namespace.trim().is_empty() {
            return Err(Error::config_invalid("recent.namespace", "must not be blank"));
        }
        Ok(())
    }
}

/// Ranking defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Minimum score for a match to be shown
    #[serde(default = "default_min_score")]
    pub min_score: u32,

    /// Candidate fields to score
    #[serde(default = "default_search_fields")]
    pub search_fields: Vec<String>,

    /// Surface and boost recent selections
    #[serde(default = "default_true")]
    pub include_recent: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            min_score: default_min_score(),
            search_fields: default_search_fields(),
            include_recent: true,
        }
    }
}

fn default_limit() -> usize {
    10
}

fn default_min_score() -> u32 {
    10
}

fn default_search_fields() -> Vec<String> {
    vec!["name".to_string()]
}

fn default_true() -> bool {
    true
}

/// Recent-selection storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentConfig {
    /// Storage key for the list
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Number of IDs kept
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Override for the storage directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
}

impl Default for RecentConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            max_items: default_max_items(),
            storage_dir: None,
        }
    }
}

fn default_namespace() -> String {
    "recent-cat-breeds".to_string()
}

fn default_max_items() -> usize {
    5
}

/// Highlight markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_open")]
    pub open: String,

    #[serde(default = "default_close")]
    pub close: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            open: default_open(),
            close: default_close(),
        }
    }
}

fn default_open() -> String {
    "<mark>".to_string()
}

fn default_close() -> String {
    "</mark>".to_string()
}

/// Keystroke handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Quiet interval before a query is ranked
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl InputConfig {
    /// Debounce interval as a `Duration`.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    300
}
