//! Checkout workflow types
//!
//! The checkout session is ephemeral; it only exists while the buyer walks
//! the three-step flow, and its terminal form is the submitted record.

use serde::{Deserialize, Serialize};

use super::invoice::PaymentMethod;

/// Steps of the linear checkout flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    PlanSelection,
    PaymentMethod,
    Confirmation,
    /// Terminal: proof submitted, awaiting manual review
    Submitted,
}

/// Proof-of-payment file attached on the confirmation step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofOfPayment {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Method-specific payment detail fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub phone: Option<String>,
    pub reference_number: Option<String>,
    pub confirmation_code: Option<String>,
    pub transaction_hash: Option<String>,
}

/// Field-specific validation flag raised when submission is blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFieldError {
    MissingProof,
    MissingPhone,
    MissingReferenceNumber,
    MissingConfirmationCode,
    MissingTransactionHash,
}

/// In-flight checkout session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub step: CheckoutStep,
    pub selected_plan_id: Option<i64>,
    pub selected_client_id: Option<i64>,
    pub selected_payment_method: Option<PaymentMethod>,
    pub payment_details: PaymentDetails,
    pub proof: Option<ProofOfPayment>,
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self {
            step: CheckoutStep::PlanSelection,
            selected_plan_id: None,
            selected_client_id: None,
            selected_payment_method: None,
            payment_details: PaymentDetails::default(),
            proof: None,
        }
    }
}
