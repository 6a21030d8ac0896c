//! Key-value-backed invoice ledger.

use std::sync::Arc;

use async_trait::async_trait;
use cobrix_core::ledger::ports::InvoiceRepository;
use cobrix_core::KeyValueStore;
use cobrix_domain::constants::KEY_INVOICES;
use cobrix_domain::{CobrixError, Invoice, Result};

use super::collections::{load_collection, save_collection};

/// Invoices stored as one JSON array under [`KEY_INVOICES`].
pub struct KvInvoiceRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvInvoiceRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InvoiceRepository for KvInvoiceRepository {
    async fn find_all(&self) -> Result<Vec<Invoice>> {
        load_collection(self.store.as_ref(), KEY_INVOICES).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Invoice>> {
        let invoices: Vec<Invoice> = load_collection(self.store.as_ref(), KEY_INVOICES).await?;
        Ok(invoices.into_iter().find(|invoice| invoice.id == id))
    }

    async fn insert(&self, invoice: Invoice) -> Result<()> {
        let mut invoices: Vec<Invoice> =
            load_collection(self.store.as_ref(), KEY_INVOICES).await?;
        invoices.push(invoice);
        save_collection(self.store.as_ref(), KEY_INVOICES, &invoices).await
    }

    async fn update(&self, invoice: Invoice) -> Result<()> {
        let mut invoices: Vec<Invoice> =
            load_collection(self.store.as_ref(), KEY_INVOICES).await?;
        match invoices.iter_mut().find(|existing| existing.id == invoice.id) {
            Some(slot) => *slot = invoice,
            None => {
                return Err(CobrixError::NotFound(format!("invoice {} not found", invoice.id)))
            }
        }
        save_collection(self.store.as_ref(), KEY_INVOICES, &invoices).await
    }
}
