//! Subscription service - core business logic

use std::sync::Arc;

use cobrix_domain::{
    CobrixError, Result, StatusFilter, Subscription, SubscriptionStatus, SubscriptionUpdate,
};
use tracing::debug;

use super::ports::{PlanRepository, SubscriptionRepository};

/// Subscription service
pub struct SubscriptionService {
    subscriptions: Arc<dyn SubscriptionRepository>,
    plans: Arc<dyn PlanRepository>,
}

impl SubscriptionService {
    /// Create a new subscription service
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        plans: Arc<dyn PlanRepository>,
    ) -> Self {
        Self { subscriptions, plans }
    }

    /// Merge partial fields into a subscription.
    ///
    /// Setting the status to Cancelled clears `next_payment_date` inside
    /// this operation; the invariant holds regardless of caller diligence.
    /// A plan change must resolve against the active plan set, otherwise
    /// the update is rejected with no mutation.
    pub async fn update_subscription(
        &self,
        id: i64,
        update: SubscriptionUpdate,
    ) -> Result<Subscription> {
        if let Some(plan_id) = update.plan_id {
            let plan = self.plans.find_by_id(plan_id).await?;
            match plan {
                Some(plan) if plan.is_active => {}
                _ => {
                    return Err(CobrixError::Validation(format!(
                        "plan {plan_id} is not an active subscription plan"
                    )));
                }
            }
        }

        let mut subscription = self
            .subscriptions
            .find_by_id(id)
            .await?
            .ok_or_else(|| CobrixError::NotFound(format!("subscription {id} not found")))?;

        if let Some(plan_id) = update.plan_id {
            subscription.plan_id = plan_id;
        }
        if let Some(next_payment_date) = update.next_payment_date {
            subscription.next_payment_date = next_payment_date;
        }
        if let Some(status) = update.status {
            subscription.status = status;
            if status == SubscriptionStatus::Cancelled {
                subscription.next_payment_date = None;
            }
        }

        self.subscriptions.update(subscription.clone()).await?;
        debug!(subscription_id = id, status = ?subscription.status, "subscription updated");
        Ok(subscription)
    }

    /// List subscriptions matching a status filter.
    pub async fn list_subscriptions(&self, filter: StatusFilter) -> Result<Vec<Subscription>> {
        let subscriptions = self.subscriptions.find_all().await?;
        Ok(subscriptions.into_iter().filter(|s| filter.matches(s)).collect())
    }
}
