//! Invoice ledger service - core business logic
//!
//! Owns the manual reconciliation state machine. Transitions out of
//! `ManualReconciliation` happen only through explicit validate/reject
//! actions; `Successful` and `Rejected` are terminal no matter what the
//! caller attempts.

use std::sync::Arc;

use chrono::Utc;
use cobrix_domain::{
    CobrixError, Invoice, InvoiceDraft, Receipt, Result, TransactionStatus,
};
use tracing::info;

use super::ports::InvoiceRepository;
use super::receipt;

const FALLBACK_REJECTION_REASON: &str = "Payment could not be verified";

/// Invoice ledger service
pub struct LedgerService {
    invoices: Arc<dyn InvoiceRepository>,
}

impl LedgerService {
    /// Create a new ledger service
    pub fn new(invoices: Arc<dyn InvoiceRepository>) -> Self {
        Self { invoices }
    }

    /// Record a new billing event, assigning the next id and a unique
    /// displayed reference ("REC-001", "REC-002", ...).
    ///
    /// A rejection reason is stored iff the status is Rejected; a rejected
    /// draft without one gets the fallback reason.
    pub async fn record_invoice(&self, draft: InvoiceDraft) -> Result<Invoice> {
        if !draft.amount.is_finite() || draft.amount < 0.0 {
            return Err(CobrixError::Validation("amount must be a non-negative number".into()));
        }

        let rejection_reason = match draft.status {
            TransactionStatus::Rejected => {
                Some(draft.rejection_reason.unwrap_or_else(|| FALLBACK_REJECTION_REASON.into()))
            }
            _ => None,
        };

        let existing = self.invoices.find_all().await?;
        let next_id = existing.iter().map(|i| i.id).max().unwrap_or(0) + 1;

        let invoice = Invoice {
            id: next_id,
            reference: format!("REC-{next_id:03}"),
            client_name: draft.client_name,
            concept: draft.concept,
            amount: draft.amount,
            payment_method: draft.payment_method,
            status: draft.status,
            date: Utc::now(),
            rejection_reason,
            resolved_status: draft.resolved_status,
        };
        self.invoices.insert(invoice.clone()).await?;
        Ok(invoice)
    }

    /// Resolve a Pending invoice into its predetermined terminal state.
    ///
    /// The reference UI shows a 1-3 second spinner before this happens; the
    /// delay is cosmetic and lives in an outer adapter, never here.
    pub async fn resolve_pending(&self, id: i64) -> Result<Invoice> {
        let mut invoice = self.require_invoice(id).await?;
        if invoice.status != TransactionStatus::Pending {
            return Err(CobrixError::Validation(format!(
                "transaction {id} is not pending resolution"
            )));
        }

        let resolved = invoice
            .resolved_status
            .unwrap_or(TransactionStatus::ManualReconciliation);
        invoice.status = resolved;
        if resolved == TransactionStatus::Rejected && invoice.rejection_reason.is_none() {
            invoice.rejection_reason = Some(FALLBACK_REJECTION_REASON.into());
        }

        self.invoices.update(invoice.clone()).await?;
        info!(invoice_id = id, status = ?invoice.status, "pending transaction resolved");
        Ok(invoice)
    }

    /// Validate a transaction under manual reconciliation. Irreversible.
    pub async fn validate_transaction(&self, id: i64) -> Result<Invoice> {
        let mut invoice = self.require_reconciliation(id).await?;
        invoice.status = TransactionStatus::Successful;
        invoice.rejection_reason = None;
        self.invoices.update(invoice.clone()).await?;
        info!(invoice_id = id, "transaction validated");
        Ok(invoice)
    }

    /// Reject a transaction under manual reconciliation. Irreversible.
    pub async fn reject_transaction(&self, id: i64, reason: &str) -> Result<Invoice> {
        let mut invoice = self.require_reconciliation(id).await?;
        invoice.status = TransactionStatus::Rejected;
        invoice.rejection_reason = Some(reason.to_string());
        self.invoices.update(invoice.clone()).await?;
        info!(invoice_id = id, "transaction rejected");
        Ok(invoice)
    }

    /// Export a receipt for an invoice. Read-only.
    pub async fn export_receipt(&self, id: i64) -> Result<Receipt> {
        let invoice = self.require_invoice(id).await?;
        Ok(receipt::build_receipt(&invoice, Utc::now()))
    }

    /// List every invoice.
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        self.invoices.find_all().await
    }

    async fn require_invoice(&self, id: i64) -> Result<Invoice> {
        self.invoices
            .find_by_id(id)
            .await?
            .ok_or_else(|| CobrixError::NotFound(format!("transaction {id} not found")))
    }

    async fn require_reconciliation(&self, id: i64) -> Result<Invoice> {
        let invoice = self.require_invoice(id).await?;
        if invoice.status != TransactionStatus::ManualReconciliation {
            return Err(CobrixError::Validation(format!(
                "transaction {id} is not under manual reconciliation"
            )));
        }
        Ok(invoice)
    }
}
