//! Local Key-Value Storage
//!
//! The cart persists through a tiny key-value interface, the server-side
//! analog of the browser's local storage. Backends:
//! - `MemoryStorage` - process-local map
//! - `FileStorage` - one file per key in a directory
//! - `DisabledStorage` - storage switched off; every call fails

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Key the cart is persisted under
pub const CART_STORAGE_KEY: &str = "originCafeCart";

/// Errors a storage backend can report.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be used at all.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the underlying file failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Minimal string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`; deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Backend used when persistence is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStorage;

impl KeyValueStore for DisabledStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage is disabled".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage is disabled".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage is disabled".into()))
    }
}
