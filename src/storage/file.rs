//! File-backed key-value storage
//!
//! Each key maps to `{base_dir}/{sanitized_key}.json`. Values survive
//! process restarts, which makes this the durable default backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreResult;

use super::KeyValueStorage;

/// Default directory for persisted values
const SESSIONS_DIR: &str = "sessions";

/// Key-value storage backed by one file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at the default directory
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from(SESSIONS_DIR),
        }
    }

    /// Create a file storage rooted at a custom directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: dir.into(),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir)?;
        }
        let path = self.key_path(key);
        fs::write(&path, value)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote storage key");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed storage key");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Sanitize a key for safe use as a filename.
/// Replaces non-alphanumeric characters (except `_` and `-`) with `_`.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::with_dir(temp_dir.path());
        (storage, temp_dir)
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let (storage, _temp) = create_test_storage();

        storage.set("key", "[1,2,3]").unwrap();
        assert_eq!(storage.get("key").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let (storage, _temp) = create_test_storage();

        storage.set("key", "old").unwrap();
        storage.set("key", "new").unwrap();
        assert_eq!(storage.get("key").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (storage, _temp) = create_test_storage();

        storage.set("key", "value").unwrap();
        storage.remove("key").unwrap();
        assert!(storage.get("key").unwrap().is_none());

        // Second removal of an absent key raises no error
        storage.remove("key").unwrap();
    }

    #[test]
    fn test_values_survive_new_instance() {
        let temp_dir = TempDir::new().unwrap();

        let storage = FileStorage::with_dir(temp_dir.path());
        storage.set("key", "persisted").unwrap();

        let reopened = FileStorage::with_dir(temp_dir.path());
        assert_eq!(reopened.get("key").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_sanitize_key_replaces_special_chars() {
        assert_eq!(sanitize_key("chess_training_sessions"), "chess_training_sessions");
        assert_eq!(sanitize_key("some/odd key!"), "some_odd_key_");
    }
}
