//! Port interface for the key-value persistence adapter

use async_trait::async_trait;
use cobrix_domain::Result;

/// Scoped string key-value store backing all entity repositories
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under a key, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under a key; no-op when absent
    async fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key starting with the given prefix
    ///
    /// Used by the administrative wipe to clear all application state.
    async fn clear_prefix(&self, prefix: &str) -> Result<()>;
}
