//! Persistence for chess-puzzle training session results
//!
//! One serialized collection of `SessionRecord`s lives under a single fixed
//! key in a key-value backend. The backend is injected: `FileStorage` is
//! the durable default, `MemoryStorage` substitutes in tests without
//! touching the filesystem.

pub mod error;
pub mod logging;
pub mod record;
pub mod storage;
pub mod store;

pub use error::{SessionStoreError, StoreResult};
pub use record::{SessionOutcome, SessionRecord};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::SessionStore;
