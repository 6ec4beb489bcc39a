//! Durable key-value storage consumed by the preference store.
//!
//! Every adapter may suspend and may fail. A missing key is `Ok(None)`,
//! never an error.

pub mod file;
pub mod memory;
pub mod sqlite;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::StorageError;

/// Canonical settings keys. Use these instead of raw string literals.
pub mod keys {
    /// Persisted theme mode, `"light"` or `"dark"`.
    pub const THEME: &str = "theme";
}

#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Human-readable backend name for logging.
    fn backend_name(&self) -> &'static str;

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Create or overwrite `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Returns true if a value was removed.
    async fn remove(&self, key: &str) -> Result<bool, StorageError>;
}
