//! Key-value-backed company registry and session store.

use std::sync::Arc;

use async_trait::async_trait;
use cobrix_core::account::ports::{CompanyRepository, SessionStore};
use cobrix_core::KeyValueStore;
use cobrix_domain::constants::{
    KEY_COMPANIES, KEY_PENDING_REGISTRATION, KEY_PREFIX, KEY_SESSION,
};
use cobrix_domain::{CobrixError, Company, PendingRegistration, Result, Session};

use super::collections::{load_collection, load_value, save_collection, save_value};

/// Companies stored as one JSON array under [`KEY_COMPANIES`].
pub struct KvCompanyRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvCompanyRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CompanyRepository for KvCompanyRepository {
    async fn find_all(&self) -> Result<Vec<Company>> {
        load_collection(self.store.as_ref(), KEY_COMPANIES).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Company>> {
        let companies: Vec<Company> = load_collection(self.store.as_ref(), KEY_COMPANIES).await?;
        Ok(companies.into_iter().find(|company| company.id == id))
    }

    async fn insert(&self, company: Company) -> Result<()> {
        let mut companies: Vec<Company> =
            load_collection(self.store.as_ref(), KEY_COMPANIES).await?;
        companies.push(company);
        save_collection(self.store.as_ref(), KEY_COMPANIES, &companies).await
    }

    async fn update(&self, company: Company) -> Result<()> {
        let mut companies: Vec<Company> =
            load_collection(self.store.as_ref(), KEY_COMPANIES).await?;
        match companies.iter_mut().find(|existing| existing.id == company.id) {
            Some(slot) => *slot = company,
            None => {
                return Err(CobrixError::NotFound(format!("company {} not found", company.id)))
            }
        }
        save_collection(self.store.as_ref(), KEY_COMPANIES, &companies).await
    }
}

/// Session marker and registration holding area, each one JSON document.
pub struct KvSessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl KvSessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionStore for KvSessionStore {
    async fn session(&self) -> Result<Option<Session>> {
        load_value(self.store.as_ref(), KEY_SESSION).await
    }

    async fn set_session(&self, session: Session) -> Result<()> {
        save_value(self.store.as_ref(), KEY_SESSION, &session).await
    }

    async fn clear_session(&self) -> Result<()> {
        self.store.remove(KEY_SESSION).await
    }

    async fn pending_registration(&self) -> Result<Option<PendingRegistration>> {
        load_value(self.store.as_ref(), KEY_PENDING_REGISTRATION).await
    }

    async fn set_pending_registration(&self, pending: PendingRegistration) -> Result<()> {
        save_value(self.store.as_ref(), KEY_PENDING_REGISTRATION, &pending).await
    }

    async fn clear_pending_registration(&self) -> Result<()> {
        self.store.remove(KEY_PENDING_REGISTRATION).await
    }

    async fn wipe_all(&self) -> Result<()> {
        self.store.clear_prefix(KEY_PREFIX).await
    }
}
