//! Invoice/transaction ledger types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Local payment methods accepted at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    PagoMovil,
    Zelle,
    Transfer,
    Binance,
}

impl PaymentMethod {
    /// Display label used on receipts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PagoMovil => "Pago Móvil",
            Self::Zelle => "Zelle",
            Self::Transfer => "Bank Transfer",
            Self::Binance => "Binance",
        }
    }
}

/// Status of a ledger transaction
///
/// `Pending` is transient and resolves to a predetermined terminal state.
/// `ManualReconciliation` is the only state human validate/reject actions
/// may transition out of; `Successful` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Successful,
    Rejected,
    ManualReconciliation,
}

impl TransactionStatus {
    /// Whether the status accepts no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Successful | Self::Rejected)
    }
}

/// Billing event recorded in the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    /// Unique displayed reference, e.g. "REC-001"
    pub reference: String,
    pub client_name: String,
    pub concept: String,
    /// USD amount, non-negative
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub status: TransactionStatus,
    pub date: DateTime<Utc>,
    /// Present iff status is Rejected
    pub rejection_reason: Option<String>,
    /// Terminal state a Pending invoice resolves into
    pub resolved_status: Option<TransactionStatus>,
}

/// Invoice fields before an id and reference are assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub client_name: String,
    pub concept: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub status: TransactionStatus,
    pub rejection_reason: Option<String>,
    pub resolved_status: Option<TransactionStatus>,
}

/// Receipt document produced by the export operation
///
/// Pure read-side formatting value; section order is fixed, exact layout is
/// cosmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub title: String,
    pub status_line: String,
    pub client_name: String,
    pub concept: String,
    pub amount_formatted: String,
    pub payment_method: String,
    pub reference: String,
    /// Rejection reason when Rejected, confirmation line when Successful
    pub outcome_line: Option<String>,
    pub generated_at: DateTime<Utc>,
}
