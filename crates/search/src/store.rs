//! Key-value storage backends for persisted selections.

use crate::error::{Result, SearchError};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Minimal string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-process store, mainly for tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

/// Store that keeps one JSON file per key in a directory.
///
/// File names are the SHA-256 of the key, so any key is a valid file name.
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store in the per-user data directory.
    pub fn open_default() -> Self {
        Self::new(Self::default_dir())
    }

    /// `<data dir>/chapiz/recent`, or `.chapiz/recent` when there is no data dir.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("chapiz"))
            .unwrap_or_else(|| PathBuf::from(".chapiz"))
            .join("recent")
    }

    /// Directory holding the entries.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir.join(format!("{}.json", hex::encode(digest)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.entry_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            SearchError::Storage(format!("Failed to replace {}: {}", path.display(), e))
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get("recent-cat-breeds").unwrap(), None);
        store.set("recent-cat-breeds", r#"["a"]"#).unwrap();
        assert_eq!(
            store.get("recent-cat-breeds").unwrap().as_deref(),
            Some(r#"["a"]"#)
        );

        store.set("recent-cat-breeds", r#"["b","a"]"#).unwrap();
        assert_eq!(
            store.get("recent-cat-breeds").unwrap().as_deref(),
            Some(r#"["b","a"]"#)
        );
    }

    #[test]
    fn test_file_store_keys_are_isolated() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store.set("recent-cat-breeds", "1").unwrap();
        store.set("recent-dog-breeds", "2").unwrap();
        assert_eq!(store.get("recent-cat-breeds").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("recent-dog-breeds").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_remove() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store.remove("missing").unwrap();
        store.set("key/with/slashes", "x").unwrap();
        store.remove("key/with/slashes").unwrap();
        assert_eq!(store.get("key/with/slashes").unwrap(), None);
    }

    #[test]
    fn test_default_dir() {
        assert!(FileStore::default_dir().ends_with("chapiz/recent"));
    }
}
