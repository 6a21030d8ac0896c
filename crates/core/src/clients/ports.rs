//! Port interfaces for client registry persistence

use async_trait::async_trait;
use cobrix_domain::{Client, Result};

/// Trait for client persistence and retrieval
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// List every client
    async fn find_all(&self) -> Result<Vec<Client>>;

    /// Get a client by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>>;

    /// Append a new client
    async fn insert(&self, client: Client) -> Result<()>;

    /// Replace an existing client record
    async fn update(&self, client: Client) -> Result<()>;

    /// Delete a client by id
    async fn delete(&self, id: i64) -> Result<()>;
}
