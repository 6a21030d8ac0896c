//! Port interfaces for subscription and plan persistence

use async_trait::async_trait;
use cobrix_domain::{Result, Subscription, SubscriptionPlan};

/// Trait for subscription persistence and retrieval
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// List every subscription
    async fn find_all(&self) -> Result<Vec<Subscription>>;

    /// Get a subscription by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Subscription>>;

    /// Append a new subscription
    async fn insert(&self, subscription: Subscription) -> Result<()>;

    /// Replace an existing subscription record
    async fn update(&self, subscription: Subscription) -> Result<()>;
}

/// Trait for plan lookup
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// List every plan
    async fn find_all(&self) -> Result<Vec<SubscriptionPlan>>;

    /// Get a plan by id
    async fn find_by_id(&self, id: i64) -> Result<Option<SubscriptionPlan>>;

    /// Append a new plan
    async fn insert(&self, plan: SubscriptionPlan) -> Result<()>;
}
