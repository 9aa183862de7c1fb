//! Durable key/value storage for string-serialized records.
//!
//! The core only needs two operations: `get` a string by key and `set` a
//! string under a key, both synchronous, surviving across sessions on the
//! same device. Read-side failures degrade to "key absent" so a damaged
//! record can never take the shop down; write failures are surfaced for the
//! caller to absorb.

use std::sync::Arc;

use thiserror::Error;

mod fs;
mod mem;

pub use fs::FsStore;
pub use mem::MemStore;

/// Errors that can occur when writing to a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem write failed (permissions, quota, ...).
    #[error("Storage write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized.
    #[error("Record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Synchronous string key/value storage.
///
/// Implementations must treat unreadable values as absent: `get` returns
/// `None` rather than propagating a read failure.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the value cannot be written durably.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Shared handle to a store backend.
pub type DynStore = Arc<dyn KeyValueStore>;
