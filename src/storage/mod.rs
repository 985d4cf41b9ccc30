//! Key-value storage backing the cart. Provides:
//! - The async [`KeyValueStore`] contract the cart persists through
//! - An in-process backend ([`MemoryStorage`])
//! - A single-file JSON backend ([`FileStorage`])
//!
//! Keys and values are plain strings; the cart owns the value format.

mod file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not a string map: {0}")]
    Codec(#[from] serde_json::Error),
}

/// String-keyed, string-valued asynchronous store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing was ever set.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}
