//! In-memory session store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

use crate::error::StorageResult;
use crate::traits::SessionStore;

/// In-memory implementation of SessionStore.
///
/// # Performance Characteristics
///
/// - **get / set / remove**: O(1) average (DashMap lookup)
/// - **clear**: O(N) over stored entries
///
/// State lives for the lifetime of the owning process: initialized empty
/// at session start, mutated by the handlers, and discarded wholesale when
/// the session ends. Nothing is persisted across restarts.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: DashMap<String, Value>,
}

impl MemorySessionStore {
    /// Creates a new empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new session store wrapped in Arc.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of stored entries. Test and diagnostics helper.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        debug!(key, "storing entry");
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let removed = self.entries.remove(key).is_some();
        debug!(key, removed, "removing entry");
        Ok(())
    }

    async fn clear(&self) -> StorageResult<()> {
        debug!(entries = self.entries.len(), "clearing session store");
        self.entries.clear();
        Ok(())
    }
}
