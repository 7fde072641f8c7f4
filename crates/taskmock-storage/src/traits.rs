//! SessionStore trait definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StorageResult;

/// Abstract key-value session store.
///
/// Keys are the decimal string form of entity ids; values are serialized
/// entity payloads. The store is schema-agnostic: handlers own the mapping
/// between entities and stored JSON. Implementations must be thread-safe
/// (Send + Sync).
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Returns the value stored under `key`, or `None` when absent.
    /// An absent key is not an error.
    async fn get(&self, key: &str) -> StorageResult<Option<Value>>;

    /// Stores `value` under `key`, overwriting any previous entry.
    async fn set(&self, key: &str, value: Value) -> StorageResult<()>;

    /// Removes the entry under `key`. No-op when the key is absent.
    async fn remove(&self, key: &str) -> StorageResult<()>;

    /// Drops every entry. Used to dispose a session's state in place.
    async fn clear(&self) -> StorageResult<()>;
}
