//! Subscription and plan types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Billing cycle for a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Annual,
}

/// Subscription plan offered to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: i64,
    pub name: String,
    /// USD price, must be non-negative
    pub price: f64,
    pub billing_cycle: BillingCycle,
    pub features: Vec<String>,
    pub is_active: bool,
}

/// Lifecycle status of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    InAppeal,
    Cancelled,
}

/// Client subscription to a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub client_id: i64,
    pub client_name: String,
    pub email: String,
    pub plan_id: i64,
    pub status: SubscriptionStatus,
    /// Absent once the subscription is cancelled
    pub next_payment_date: Option<NaiveDate>,
}

/// Partial update applied to a subscription; unset fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionUpdate {
    pub plan_id: Option<i64>,
    pub status: Option<SubscriptionStatus>,
    pub next_payment_date: Option<Option<NaiveDate>>,
}

/// Read-side status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(SubscriptionStatus),
}

impl StatusFilter {
    /// Whether a subscription passes the filter.
    pub fn matches(&self, subscription: &Subscription) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => subscription.status == *status,
        }
    }
}
