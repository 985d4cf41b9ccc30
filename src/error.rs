//! Errors surfaced by the cart.
//!
//! Contains error variants for:
//! - Provider lookups made outside an active scope
//! - Key-value storage failures (reads and writes)
//! - Persisted payloads that do not decode into line items
//! - Invalid configuration values

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("useCart must be used within a CartProvider")]
    OutsideProvider,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("malformed cart payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode cart payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
