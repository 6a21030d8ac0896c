//! Key-value-backed client registry.

use std::sync::Arc;

use async_trait::async_trait;
use cobrix_core::clients::ports::ClientRepository;
use cobrix_core::KeyValueStore;
use cobrix_domain::constants::KEY_CLIENTS;
use cobrix_domain::{Client, CobrixError, Result};

use super::collections::{load_collection, save_collection};

/// Clients stored as one JSON array under [`KEY_CLIENTS`].
pub struct KvClientRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvClientRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ClientRepository for KvClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>> {
        load_collection(self.store.as_ref(), KEY_CLIENTS).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>> {
        let clients: Vec<Client> = load_collection(self.store.as_ref(), KEY_CLIENTS).await?;
        Ok(clients.into_iter().find(|client| client.id == id))
    }

    async fn insert(&self, client: Client) -> Result<()> {
        let mut clients: Vec<Client> = load_collection(self.store.as_ref(), KEY_CLIENTS).await?;
        clients.push(client);
        save_collection(self.store.as_ref(), KEY_CLIENTS, &clients).await
    }

    async fn update(&self, client: Client) -> Result<()> {
        let mut clients: Vec<Client> = load_collection(self.store.as_ref(), KEY_CLIENTS).await?;
        match clients.iter_mut().find(|existing| existing.id == client.id) {
            Some(slot) => *slot = client,
            None => return Err(CobrixError::NotFound(format!("client {} not found", client.id))),
        }
        save_collection(self.store.as_ref(), KEY_CLIENTS, &clients).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut clients: Vec<Client> = load_collection(self.store.as_ref(), KEY_CLIENTS).await?;
        let before = clients.len();
        clients.retain(|client| client.id != id);
        if clients.len() == before {
            return Err(CobrixError::NotFound(format!("client {id} not found")));
        }
        save_collection(self.store.as_ref(), KEY_CLIENTS, &clients).await
    }
}
