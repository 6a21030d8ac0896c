//! # Cobrix Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for persistence
//! - Registry services for companies, clients, subscriptions and invoices
//! - The checkout state machine and the template/schedule model
//!
//! ## Architecture Principles
//! - Only depends on `cobrix-domain`
//! - No database or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod account;
pub mod checkout;
pub mod clients;
pub mod ledger;
pub mod store;
pub mod subscriptions;
pub mod templates;

// Re-export specific items to avoid ambiguity
pub use account::ports::{CompanyRepository, SessionStore};
pub use account::AccountService;
pub use checkout::{CheckoutFlow, SubmitError};
pub use clients::ports::ClientRepository;
pub use clients::{ClientService, ImportReport};
pub use ledger::ports::InvoiceRepository;
pub use ledger::LedgerService;
pub use store::KeyValueStore;
pub use subscriptions::ports::{PlanRepository, SubscriptionRepository};
pub use subscriptions::SubscriptionService;
pub use templates::ports::{ScheduleRepository, TemplateRepository};
pub use templates::{Schedule, TemplateService, TemplateUpdate};
