//! Company (tenant) types
//!
//! A single company owns every other record in the system: clients,
//! subscriptions, invoices and message templates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered company, the tenant owning all other data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    /// Venezuelan fiscal id, format `[JVE]-########-#`
    pub business_id: String,
    pub legal_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub niche: String,
    /// Self-reported customer volume band (e.g. "1-50", "51-200")
    pub customer_volume_band: String,
    pub password: String,
    pub registered_at: DateTime<Utc>,
    /// Plan chosen when registration completed
    pub plan: String,
}

/// Registration data captured by the signup form, before plan selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRegistration {
    pub business_id: String,
    pub legal_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub niche: String,
    pub customer_volume_band: String,
    pub password: String,
}

/// Registration held in the session-scoped holding area until the company
/// picks a plan and payment method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingRegistration {
    pub registration: CompanyRegistration,
    pub created_at: DateTime<Utc>,
}

/// Payment metadata captured when a registration is completed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub method: String,
    pub reference: Option<String>,
}

/// Authenticated session marker for the logged-in company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub company_id: String,
    pub email: String,
    pub started_at: DateTime<Utc>,
}

/// Partial update for the general-info profile group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralInfoUpdate {
    pub legal_name: Option<String>,
    pub business_id: Option<String>,
    pub owner_name: Option<String>,
}

/// Partial update for the contact-info profile group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfoUpdate {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Partial update for the business-info profile group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessInfoUpdate {
    pub niche: Option<String>,
    pub customer_volume_band: Option<String>,
}
