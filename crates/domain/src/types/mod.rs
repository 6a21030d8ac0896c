//! Domain types and models

pub mod checkout;
pub mod client;
pub mod company;
pub mod invoice;
pub mod subscription;
pub mod template;

pub use checkout::{
    CheckoutSession, CheckoutStep, PaymentDetails, PaymentFieldError, ProofOfPayment,
};
pub use client::{Client, ClientDraft, ClientUpdate, ImportFormat};
pub use company::{
    BusinessInfoUpdate, Company, CompanyRegistration, ContactInfoUpdate, GeneralInfoUpdate,
    PaymentInfo, PendingRegistration, Session,
};
pub use invoice::{Invoice, InvoiceDraft, PaymentMethod, Receipt, TransactionStatus};
pub use subscription::{
    BillingCycle, StatusFilter, Subscription, SubscriptionPlan, SubscriptionStatus,
    SubscriptionUpdate,
};
pub use template::{MessageKind, ScheduledMessage, Template, TemplateDraft};
