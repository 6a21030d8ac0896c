//! In-memory implementation of the key-value persistence port.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cobrix_core::KeyValueStore;
use cobrix_domain::{CobrixError, Result};

/// Volatile store for tests and ephemeral setups. Interchangeable with the
/// SQLite-backed store behind the same port.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| CobrixError::Internal("key-value store mutex poisoned".into()))
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }

    async fn clear_prefix(&self, prefix: &str) -> Result<()> {
        self.entries()?.retain(|key, _| !key.starts_with(prefix));
        Ok(())
    }
}
