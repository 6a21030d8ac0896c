//! Key-value-backed subscription and plan stores.

use std::sync::Arc;

use async_trait::async_trait;
use cobrix_core::subscriptions::ports::{PlanRepository, SubscriptionRepository};
use cobrix_core::KeyValueStore;
use cobrix_domain::constants::{KEY_PLANS, KEY_SUBSCRIPTIONS};
use cobrix_domain::{CobrixError, Result, Subscription, SubscriptionPlan};

use super::collections::{load_collection, save_collection};

/// Subscriptions stored as one JSON array under [`KEY_SUBSCRIPTIONS`].
pub struct KvSubscriptionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvSubscriptionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubscriptionRepository for KvSubscriptionRepository {
    async fn find_all(&self) -> Result<Vec<Subscription>> {
        load_collection(self.store.as_ref(), KEY_SUBSCRIPTIONS).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Subscription>> {
        let subscriptions: Vec<Subscription> =
            load_collection(self.store.as_ref(), KEY_SUBSCRIPTIONS).await?;
        Ok(subscriptions.into_iter().find(|subscription| subscription.id == id))
    }

    async fn insert(&self, subscription: Subscription) -> Result<()> {
        let mut subscriptions: Vec<Subscription> =
            load_collection(self.store.as_ref(), KEY_SUBSCRIPTIONS).await?;
        subscriptions.push(subscription);
        save_collection(self.store.as_ref(), KEY_SUBSCRIPTIONS, &subscriptions).await
    }

    async fn update(&self, subscription: Subscription) -> Result<()> {
        let mut subscriptions: Vec<Subscription> =
            load_collection(self.store.as_ref(), KEY_SUBSCRIPTIONS).await?;
        match subscriptions.iter_mut().find(|existing| existing.id == subscription.id) {
            Some(slot) => *slot = subscription,
            None => {
                return Err(CobrixError::NotFound(format!(
                    "subscription {} not found",
                    subscription.id
                )))
            }
        }
        save_collection(self.store.as_ref(), KEY_SUBSCRIPTIONS, &subscriptions).await
    }
}

/// Plans stored as one JSON array under [`KEY_PLANS`].
pub struct KvPlanRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvPlanRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PlanRepository for KvPlanRepository {
    async fn find_all(&self) -> Result<Vec<SubscriptionPlan>> {
        load_collection(self.store.as_ref(), KEY_PLANS).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SubscriptionPlan>> {
        let plans: Vec<SubscriptionPlan> = load_collection(self.store.as_ref(), KEY_PLANS).await?;
        Ok(plans.into_iter().find(|plan| plan.id == id))
    }

    async fn insert(&self, plan: SubscriptionPlan) -> Result<()> {
        let mut plans: Vec<SubscriptionPlan> =
            load_collection(self.store.as_ref(), KEY_PLANS).await?;
        plans.push(plan);
        save_collection(self.store.as_ref(), KEY_PLANS, &plans).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use cobrix_domain::{BillingCycle, SubscriptionStatus};

    use super::*;
    use crate::database::InMemoryKeyValueStore;

    #[tokio::test]
    async fn subscriptions_and_plans_live_under_separate_keys() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let subs = KvSubscriptionRepository::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        let plans = KvPlanRepository::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);

        plans
            .insert(SubscriptionPlan {
                id: 1,
                name: "Emprendedor".into(),
                price: 20.0,
                billing_cycle: BillingCycle::Monthly,
                features: vec!["hasta 50 clientes".into()],
                is_active: true,
            })
            .await
            .unwrap();
        subs.insert(Subscription {
            id: 1,
            client_id: 7,
            client_name: "Juan Perez".into(),
            email: "juan@x.com".into(),
            plan_id: 1,
            status: SubscriptionStatus::Active,
            next_payment_date: NaiveDate::from_ymd_opt(2026, 9, 1),
        })
        .await
        .unwrap();

        assert_eq!(plans.find_all().await.unwrap().len(), 1);
        assert_eq!(subs.find_all().await.unwrap().len(), 1);
        assert_eq!(subs.find_by_id(1).await.unwrap().unwrap().plan_id, 1);
    }

    #[tokio::test]
    async fn updating_a_missing_subscription_is_not_found() {
        let subs = KvSubscriptionRepository::new(Arc::new(InMemoryKeyValueStore::new()));
        let err = subs
            .update(Subscription {
                id: 9,
                client_id: 1,
                client_name: "Ana".into(),
                email: "ana@x.com".into(),
                plan_id: 1,
                status: SubscriptionStatus::Cancelled,
                next_payment_date: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CobrixError::NotFound(_)));
    }
}
