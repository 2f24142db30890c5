//! Local key/value preference storage.
//!
//! The page persists exactly two scalar preferences (`language` and
//! `portfolio-theme`). Both stores write through one [`SharedStorage`]
//! handle so that the keys end up in the same file.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::ensure_private_dir;
use crate::error::Result;

/// Storage key holding the chosen locale tag.
pub const LANGUAGE_KEY: &str = "language";
/// Storage key holding the chosen palette id.
pub const THEME_KEY: &str = "portfolio-theme";

/// A flat string-to-string store with synchronous reads and writes.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

pub type SharedStorage = Rc<RefCell<dyn PreferenceStore>>;

/// In-memory store, used by tests and by `--memory` sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, as if a previous session had written `pairs`.
    #[cfg(test)]
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            writes: 0,
        }
    }

    /// Number of `set` calls received so far.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }
}

impl PreferenceStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file backed store (`preferences.json`).
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the store at `path`. A missing, unreadable or malformed file
    /// yields an empty store; the file is only (re)written on the next `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read_values(&path) {
            Ok(values) => values,
            Err(e) => {
                if path.exists() {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
                }
                BTreeMap::new()
            }
        };
        tracing::debug!(path = %path.display(), entries = values.len(), "preferences opened");
        Self { path, values }
    }

    fn read_values(path: &Path) -> Result<BTreeMap<String, String>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn flush(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            ensure_private_dir(dir)?;
        }
        let temp_path = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(&self.values)?;

        // Atomic write: write to temp file first, then rename
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get(LANGUAGE_KEY), None);
        storage.set(LANGUAGE_KEY, "ru").unwrap();
        assert_eq!(storage.get(LANGUAGE_KEY), Some("ru".to_string()));
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_memory_storage_prepopulated() {
        let storage = MemoryStorage::with(&[(THEME_KEY, "red")]);
        assert_eq!(storage.get(THEME_KEY), Some("red".to_string()));
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut storage = FileStorage::open(&path);
        storage.set(LANGUAGE_KEY, "ru").unwrap();
        storage.set(THEME_KEY, "blue").unwrap();
        assert!(!dir.path().join("preferences.json.tmp").exists());

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get(LANGUAGE_KEY), Some("ru".to_string()));
        assert_eq!(reopened.get(THEME_KEY), Some("blue".to_string()));
    }

    #[test]
    fn test_file_storage_malformed_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn test_file_storage_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("nested").join("preferences.json"));
        assert_eq!(storage.get(THEME_KEY), None);
    }

    #[test]
    fn test_file_storage_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let mut storage = FileStorage::open(&path);
        storage.set(THEME_KEY, "dark").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_storage_shares_keys_through_one_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let shared: SharedStorage = Rc::new(RefCell::new(FileStorage::open(&path)));

        shared.borrow_mut().set(LANGUAGE_KEY, "en").unwrap();
        shared.borrow_mut().set(THEME_KEY, "red").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"language\": \"en\""));
        assert!(content.contains("\"portfolio-theme\": \"red\""));
    }
}
