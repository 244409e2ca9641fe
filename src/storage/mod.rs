//! Key-value storage backends
//!
//! The store keeps one serialized collection under a single string key.
//! The backend is injected rather than reached for as an ambient global,
//! so tests can substitute `MemoryStorage` for the durable `FileStorage`.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StoreResult;

/// A synchronous string key-value slot
pub trait KeyValueStorage {
    /// Read the value under `key`. `None` when the key is absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key` entirely. No-op when the key is absent.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
