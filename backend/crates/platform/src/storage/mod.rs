//! Key-Value Storage Capability
//!
//! A string-keyed, string-valued store modelled on browser web storage.
//! Durable data (the admin credential, the language preference) and
//! session-scoped data (the session marker) both go through this trait;
//! which backend is plugged in decides the lifetime.

pub mod json_file;
pub mod memory;

use thiserror::Error;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend cannot be reached at all
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Write would exceed the backend's size limit
    #[error("Storage quota exceeded (limit {limit} bytes)")]
    QuotaExceeded { limit: usize },

    /// Backend refused access
    #[error("Storage access denied: {0}")]
    AccessDenied(String),

    /// Underlying file I/O failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend content cannot be decoded
    #[error("Stored data is corrupted: {0}")]
    Corrupted(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value store trait
#[trait_variant::make(KeyValueStore: Send)]
pub trait LocalKeyValueStore {
    /// Read a value; `None` when the key is absent
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
