//! Session store
//!
//! CRUD over one serialized collection of session records, held under a
//! single fixed key in an injected key-value backend. Each call is a
//! self-contained read-modify-write against that slot; there is no state
//! across calls beyond the persisted content itself.

use uuid::Uuid;

use crate::error::{SessionStoreError, StoreResult};
use crate::record::{SessionOutcome, SessionRecord};
use crate::storage::{FileStorage, KeyValueStorage};

/// Storage key holding the serialized record collection
const STORAGE_KEY: &str = "chess_training_sessions";

/// Persistent store of training session results
#[derive(Debug)]
pub struct SessionStore<S = FileStorage> {
    storage: S,
}

impl SessionStore<FileStorage> {
    /// Store over the default file backend (`sessions/` directory)
    pub fn open_default() -> Self {
        Self::new(FileStorage::new())
    }
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Create a store over the given backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Record a finished session
    ///
    /// Generates a fresh identifier and timestamp, appends the full record
    /// to the stored collection and writes the collection back. Backend
    /// write failures propagate; no retry or recovery is attempted.
    pub fn save_session(&self, outcome: SessionOutcome) -> StoreResult<()> {
        let mut sessions = self.list_sessions()?;
        let record = SessionRecord::new(outcome);
        tracing::debug!(id = %record.id, "saving session record");
        sessions.push(record);
        self.write_sessions(&sessions)
    }

    /// All stored records, in insertion order
    ///
    /// Returns an empty vector when nothing has been saved yet. Stored text
    /// that does not parse as a record collection surfaces as
    /// `SessionStoreError::CorruptData`; no recovery is attempted.
    pub fn list_sessions(&self) -> StoreResult<Vec<SessionRecord>> {
        match self.storage.get(STORAGE_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|source| SessionStoreError::CorruptData {
                    key: STORAGE_KEY.to_string(),
                    source,
                })
            }
            None => Ok(Vec::new()),
        }
    }

    /// Delete the record with the given identifier
    ///
    /// Rewrites the collection without it. Silent no-op when no record
    /// matches.
    pub fn delete_session(&self, id: Uuid) -> StoreResult<()> {
        let mut sessions = self.list_sessions()?;
        sessions.retain(|session| session.id != id);
        self.write_sessions(&sessions)
    }

    /// Remove every stored record by dropping the storage key. Idempotent.
    pub fn clear_all_sessions(&self) -> StoreResult<()> {
        self.storage.remove(STORAGE_KEY)
    }

    fn write_sessions(&self, sessions: &[SessionRecord]) -> StoreResult<()> {
        let json = serde_json::to_string(sessions)?;
        self.storage.set(STORAGE_KEY, &json)
    }
}
