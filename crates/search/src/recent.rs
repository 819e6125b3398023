//! Most-recently-selected candidate IDs, persisted per namespace.
//!
//! This is a best-effort cache: every storage failure (missing backend,
//! write errors, corrupt data) degrades to "no recents" and is only logged.

use crate::store::KeyValueStore;

/// Default number of IDs kept.
pub const DEFAULT_MAX_RECENT: usize = 5;

/// Capacity-bounded, deduplicated MRU list of candidate IDs.
///
/// # Example
/// ```
/// use chapiz_search::{MemoryStore, RecentSelections};
///
/// let recent = RecentSelections::new(MemoryStore::new(), "recent-cat-breeds");
/// recent.add_recent("x");
/// recent.add_recent("y");
/// assert_eq!(recent.get_recent(), vec!["y", "x"]);
/// ```
#[derive(Debug)]
pub struct RecentSelections<S> {
    store: S,
    namespace: String,
    max_items: usize,
}

impl<S: KeyValueStore> RecentSelections<S> {
    /// Creates a list stored under `namespace` with the default capacity.
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
            max_items: DEFAULT_MAX_RECENT,
        }
    }

    /// Sets the capacity (at least 1).
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items.max(1);
        self
    }

    /// Storage key of this list.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Maximum number of IDs kept.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Recent IDs, most recent first. Empty if nothing usable is stored.
    pub fn get_recent(&self) -> Vec<String> {
        let raw = match self.store.get(&self.namespace) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::debug!(namespace = %self.namespace, error = %e, "Recent selections unavailable");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(mut ids) => {
                ids.truncate(self.max_items);
                ids
            }
            Err(e) => {
                tracing::debug!(namespace = %self.namespace, error = %e, "Ignoring corrupt recent selections");
                Vec::new()
            }
        }
    }

    /// Move `id` to the front, dropping the oldest entry past capacity.
    pub fn add_recent(&self, id: &str) {
        let mut ids = self.get_recent();
        ids.retain(|existing| existing != id);
        ids.insert(0, id.to_string());
        ids.truncate(self.max_items);

        let result = serde_json::to_string(&ids)
            .map_err(Into::into)
            .and_then(|json| self.store.set(&self.namespace, &json));

        if let Err(e) = result {
            tracing::warn!(namespace = %self.namespace, error = %e, "Failed to save recent selection");
        }
    }

    /// Forget every recent selection.
    pub fn clear_recent(&self) {
        if let Err(e) = self.store.remove(&self.namespace) {
            tracing::warn!(namespace = %self.namespace, error = %e, "Failed to clear recent selections");
        }
    }
}
