//! Client registry service - core business logic

use std::sync::Arc;

use cobrix_domain::{Client, ClientDraft, ClientUpdate, CobrixError, ImportFormat, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::import;
use super::ports::ClientRepository;

/// Outcome of a bulk import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    /// Records parsed and accepted from the file
    pub parsed: usize,
    /// Records actually added to the registry
    pub imported: usize,
}

/// Client registry service
pub struct ClientService {
    clients: Arc<dyn ClientRepository>,
}

impl ClientService {
    /// Create a new client service
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    /// Add a client, assigning the next sequential id.
    ///
    /// Ids are `max(existing) + 1`, starting at 1 for an empty registry.
    pub async fn add_client(&self, draft: ClientDraft) -> Result<Client> {
        validate_draft(&draft)?;

        let existing = self.clients.find_all().await?;
        let next_id = existing.iter().map(|c| c.id).max().unwrap_or(0) + 1;

        let client = Client {
            id: next_id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            national_id: draft.national_id,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
        };
        self.clients.insert(client.clone()).await?;
        debug!(client_id = client.id, "client added");
        Ok(client)
    }

    /// Merge partial fields into an existing client.
    pub async fn update_client(&self, id: i64, update: ClientUpdate) -> Result<Client> {
        let mut client = self
            .clients
            .find_by_id(id)
            .await?
            .ok_or_else(|| CobrixError::NotFound(format!("client {id} not found")))?;

        if let Some(first_name) = update.first_name {
            client.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            client.last_name = last_name;
        }
        if let Some(national_id) = update.national_id {
            client.national_id = national_id;
        }
        if let Some(email) = update.email {
            client.email = email;
        }
        if let Some(phone) = update.phone {
            client.phone = phone;
        }
        if let Some(address) = update.address {
            client.address = address;
        }

        self.clients.update(client.clone()).await?;
        Ok(client)
    }

    /// Delete a client by id.
    pub async fn delete_client(&self, id: i64) -> Result<()> {
        self.clients.delete(id).await
    }

    /// List every client.
    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        self.clients.find_all().await
    }

    /// Bulk-import clients from file content.
    ///
    /// The format is resolved from the file extension. Accepted records are
    /// added one at a time; records a later add rejects are dropped without
    /// aborting the loop, so partial success is possible.
    pub async fn bulk_import(&self, file_name: &str, content: &str) -> Result<ImportReport> {
        let extension = file_name.rsplit('.').next().unwrap_or_default();
        let format = ImportFormat::from_extension(extension)?;
        let drafts = import::parse(content, format)?;

        let parsed = drafts.len();
        let mut imported = 0;
        for draft in drafts {
            if self.add_client(draft).await.is_ok() {
                imported += 1;
            }
        }

        info!(file = %file_name, parsed, imported, "bulk import finished");
        Ok(ImportReport { parsed, imported })
    }
}

/// Required fields for a client record created through the registry.
///
/// Every field except the national id must be present; import rows that
/// fail this check are the ones the bulk loop drops.
fn validate_draft(draft: &ClientDraft) -> Result<()> {
    let missing = [
        ("first name", &draft.first_name),
        ("last name", &draft.last_name),
        ("email", &draft.email),
        ("phone", &draft.phone),
        ("address", &draft.address),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(label, _)| label)
    .collect::<Vec<_>>();

    if !missing.is_empty() {
        return Err(CobrixError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }
    Ok(())
}
