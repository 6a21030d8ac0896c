//! Port interfaces for company/account management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for account operations.

use async_trait::async_trait;
use cobrix_domain::{Company, PendingRegistration, Result, Session};

/// Trait for company registry persistence and retrieval
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// List every registered company
    async fn find_all(&self) -> Result<Vec<Company>>;

    /// Get a company by id
    async fn find_by_id(&self, id: &str) -> Result<Option<Company>>;

    /// Append a new company to the registry
    async fn insert(&self, company: Company) -> Result<()>;

    /// Replace an existing company record
    async fn update(&self, company: Company) -> Result<()>;
}

/// Trait for the session marker and the registration holding area
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get the current authenticated session, if any
    async fn session(&self) -> Result<Option<Session>>;

    /// Establish the authenticated session
    async fn set_session(&self, session: Session) -> Result<()>;

    /// Clear the session marker only; no data is deleted
    async fn clear_session(&self) -> Result<()>;

    /// Get the pending registration held between signup and plan selection
    async fn pending_registration(&self) -> Result<Option<PendingRegistration>>;

    /// Store a pending registration
    async fn set_pending_registration(&self, pending: PendingRegistration) -> Result<()>;

    /// Clear the pending registration holding area
    async fn clear_pending_registration(&self) -> Result<()>;

    /// Administrative wipe: clear every stored entity collection
    async fn wipe_all(&self) -> Result<()>;
}
