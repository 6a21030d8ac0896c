//! Port interfaces for the invoice ledger

use async_trait::async_trait;
use cobrix_domain::{Invoice, Result};

/// Trait for invoice persistence and retrieval
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// List every invoice
    async fn find_all(&self) -> Result<Vec<Invoice>>;

    /// Get an invoice by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Invoice>>;

    /// Append a new invoice
    async fn insert(&self, invoice: Invoice) -> Result<()>;

    /// Replace an existing invoice record
    async fn update(&self, invoice: Invoice) -> Result<()>;
}
