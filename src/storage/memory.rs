//! In-memory key-value storage
//!
//! Same contract as `FileStorage` without touching the filesystem. Used as
//! the substitutable test backend; nothing persists past the instance.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StoreResult;

use super::KeyValueStorage;

/// Volatile key-value storage backed by a map
#[derive(Debug, Default)]
pub struct MemoryStorage {
    // Mutex for &self interior mutability only; the store is single-threaded
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let values = self.values.lock().expect("storage mutex poisoned");
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut values = self.values.lock().expect("storage mutex poisoned");
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut values = self.values.lock().expect("storage mutex poisoned");
        values.remove(key);
        Ok(())
    }
}
