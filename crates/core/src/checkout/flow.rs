//! Checkout state machine
//!
//! `PlanSelection -> PaymentMethod -> Confirmation -> Submitted`. Advancing
//! requires the current step to validate; back-navigation moves exactly one
//! step. Submission checks the proof file plus the method-specific required
//! fields and raises field-specific flags without clearing anything.

use cobrix_domain::{
    CheckoutSession, CheckoutStep, CobrixError, PaymentDetails, PaymentFieldError, PaymentMethod,
    ProofOfPayment, Result,
};
use tracing::{debug, info};
use url::Url;

/// Why a submission was blocked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Submission is only allowed from the confirmation step
    WrongStep(CheckoutStep),
    /// Field-specific flags; nothing entered is cleared
    MissingFields(Vec<PaymentFieldError>),
}

/// Checkout flow over an ephemeral session
#[derive(Debug, Default, Clone)]
pub struct CheckoutFlow {
    session: CheckoutSession,
}

impl CheckoutFlow {
    /// Start a fresh checkout at the plan-selection step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a checkout pre-populated from a deep-link URL.
    ///
    /// The URL may carry optional `plan` and `client` query parameters; both
    /// are unsigned and carry no expiry, matching the reference behavior.
    pub fn from_deep_link(link: &str) -> Result<Self> {
        let url = Url::parse(link)
            .map_err(|e| CobrixError::Validation(format!("invalid checkout link: {e}")))?;

        let mut flow = Self::new();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "plan" => {
                    flow.session.selected_plan_id = value.parse::<i64>().ok();
                }
                "client" => {
                    flow.session.selected_client_id = value.parse::<i64>().ok();
                }
                _ => {}
            }
        }
        debug!(
            plan = ?flow.session.selected_plan_id,
            client = ?flow.session.selected_client_id,
            "checkout pre-populated from deep link"
        );
        Ok(flow)
    }

    /// Current session state.
    pub fn session(&self) -> &CheckoutSession {
        &self.session
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.session.step
    }

    /// Select a plan while on the plan-selection step.
    pub fn select_plan(&mut self, plan_id: i64) -> Result<()> {
        self.require_step(CheckoutStep::PlanSelection)?;
        self.session.selected_plan_id = Some(plan_id);
        Ok(())
    }

    /// Select a payment method while on the payment-method step.
    pub fn select_payment_method(&mut self, method: PaymentMethod) -> Result<()> {
        self.require_step(CheckoutStep::PaymentMethod)?;
        self.session.selected_payment_method = Some(method);
        Ok(())
    }

    /// Fill the method-specific payment fields on the confirmation step.
    pub fn set_payment_details(&mut self, details: PaymentDetails) -> Result<()> {
        self.require_step(CheckoutStep::Confirmation)?;
        self.session.payment_details = details;
        Ok(())
    }

    /// Attach the proof-of-payment file on the confirmation step.
    pub fn attach_proof(&mut self, proof: ProofOfPayment) -> Result<()> {
        self.require_step(CheckoutStep::Confirmation)?;
        self.session.proof = Some(proof);
        Ok(())
    }

    /// Advance to the next step; blocked until the current step validates.
    pub fn advance(&mut self) -> Result<CheckoutStep> {
        let next = match self.session.step {
            CheckoutStep::PlanSelection => {
                if self.session.selected_plan_id.is_none() {
                    return Err(CobrixError::Validation(
                        "select a plan before continuing".into(),
                    ));
                }
                CheckoutStep::PaymentMethod
            }
            CheckoutStep::PaymentMethod => {
                if self.session.selected_payment_method.is_none() {
                    return Err(CobrixError::Validation(
                        "select a payment method before continuing".into(),
                    ));
                }
                CheckoutStep::Confirmation
            }
            CheckoutStep::Confirmation => {
                return Err(CobrixError::Validation(
                    "submit the payment proof to finish checkout".into(),
                ));
            }
            CheckoutStep::Submitted => {
                return Err(CobrixError::Validation("checkout already submitted".into()));
            }
        };
        self.session.step = next;
        Ok(next)
    }

    /// Go back exactly one step; no-op on the first step.
    pub fn back(&mut self) -> Result<CheckoutStep> {
        let previous = match self.session.step {
            CheckoutStep::PlanSelection => CheckoutStep::PlanSelection,
            CheckoutStep::PaymentMethod => CheckoutStep::PlanSelection,
            CheckoutStep::Confirmation => CheckoutStep::PaymentMethod,
            CheckoutStep::Submitted => {
                return Err(CobrixError::Validation("checkout already submitted".into()));
            }
        };
        self.session.step = previous;
        Ok(previous)
    }

    /// Field flags currently blocking submission, in display order.
    pub fn missing_fields(&self) -> Vec<PaymentFieldError> {
        let mut flags = Vec::new();
        if self.session.proof.is_none() {
            flags.push(PaymentFieldError::MissingProof);
        }

        let details = &self.session.payment_details;
        let present = |field: &Option<String>| {
            field.as_deref().is_some_and(|v| !v.trim().is_empty())
        };

        match self.session.selected_payment_method {
            Some(PaymentMethod::PagoMovil) => {
                if !present(&details.phone) {
                    flags.push(PaymentFieldError::MissingPhone);
                }
                if !present(&details.reference_number) {
                    flags.push(PaymentFieldError::MissingReferenceNumber);
                }
            }
            Some(PaymentMethod::Zelle) => {
                if !present(&details.confirmation_code) {
                    flags.push(PaymentFieldError::MissingConfirmationCode);
                }
            }
            Some(PaymentMethod::Transfer) => {
                if !present(&details.reference_number) {
                    flags.push(PaymentFieldError::MissingReferenceNumber);
                }
            }
            Some(PaymentMethod::Binance) => {
                if !present(&details.transaction_hash) {
                    flags.push(PaymentFieldError::MissingTransactionHash);
                }
            }
            None => {}
        }
        flags
    }

    /// Submit the checkout from the confirmation step.
    ///
    /// Any missing field blocks submission and leaves every entered value in
    /// place. On success the session is terminal; the actual payment is
    /// reviewed manually within 24 hours.
    pub fn submit(&mut self) -> std::result::Result<CheckoutSession, SubmitError> {
        if self.session.step != CheckoutStep::Confirmation {
            return Err(SubmitError::WrongStep(self.session.step));
        }
        let flags = self.missing_fields();
        if !flags.is_empty() {
            return Err(SubmitError::MissingFields(flags));
        }

        self.session.step = CheckoutStep::Submitted;
        info!(
            plan = ?self.session.selected_plan_id,
            method = ?self.session.selected_payment_method,
            "checkout submitted for manual review"
        );
        Ok(self.session.clone())
    }

    fn require_step(&self, step: CheckoutStep) -> Result<()> {
        if self.session.step != step {
            return Err(CobrixError::Validation(format!(
                "operation not allowed on step {:?}",
                self.session.step
            )));
        }
        Ok(())
    }
}
