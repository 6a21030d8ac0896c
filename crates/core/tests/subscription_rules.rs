//! Subscription model integration tests: invariants and plan resolution.

mod support;

use std::sync::Arc;

use chrono::NaiveDate;
use cobrix_core::SubscriptionService;
use cobrix_domain::{
    BillingCycle, CobrixError, StatusFilter, Subscription, SubscriptionPlan, SubscriptionStatus,
    SubscriptionUpdate,
};
use support::repositories::{MockPlanRepository, MockSubscriptionRepository};

fn plan(id: i64, active: bool) -> SubscriptionPlan {
    SubscriptionPlan {
        id,
        name: format!("Plan {id}"),
        price: 20.0,
        billing_cycle: BillingCycle::Monthly,
        features: vec!["acceso total".into()],
        is_active: active,
    }
}

fn subscription(id: i64, status: SubscriptionStatus) -> Subscription {
    Subscription {
        id,
        client_id: 1,
        client_name: "Juan Perez".into(),
        email: "juan@x.com".into(),
        plan_id: 1,
        status,
        next_payment_date: NaiveDate::from_ymd_opt(2026, 9, 1),
    }
}

fn service(subs: MockSubscriptionRepository, plans: MockPlanRepository) -> SubscriptionService {
    SubscriptionService::new(Arc::new(subs), Arc::new(plans))
}

#[tokio::test]
async fn cancelling_clears_the_next_payment_date() {
    let subs = MockSubscriptionRepository::new()
        .with_subscription(subscription(1, SubscriptionStatus::Active));
    let service = service(subs, MockPlanRepository::new().with_plan(plan(1, true)));

    let updated = service
        .update_subscription(
            1,
            SubscriptionUpdate {
                status: Some(SubscriptionStatus::Cancelled),
                // A date set in the same update must still end up cleared.
                next_payment_date: Some(NaiveDate::from_ymd_opt(2026, 10, 1)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, SubscriptionStatus::Cancelled);
    assert_eq!(updated.next_payment_date, None);
}

#[tokio::test]
async fn unknown_plan_rejects_the_update_without_mutation() {
    let subs = MockSubscriptionRepository::new()
        .with_subscription(subscription(1, SubscriptionStatus::Active));
    let service = service(subs.clone(), MockPlanRepository::new().with_plan(plan(1, true)));

    let err = service
        .update_subscription(1, SubscriptionUpdate { plan_id: Some(42), ..Default::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, CobrixError::Validation(_)));

    use cobrix_core::subscriptions::ports::SubscriptionRepository;
    let stored = subs.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.plan_id, 1);
}

#[tokio::test]
async fn inactive_plans_do_not_resolve() {
    let subs = MockSubscriptionRepository::new()
        .with_subscription(subscription(1, SubscriptionStatus::Active));
    let service = service(subs, MockPlanRepository::new().with_plan(plan(2, false)));

    let err = service
        .update_subscription(1, SubscriptionUpdate { plan_id: Some(2), ..Default::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, CobrixError::Validation(_)));
}

#[tokio::test]
async fn status_filter_is_exact_or_wildcard() {
    let subs = MockSubscriptionRepository::new()
        .with_subscription(subscription(1, SubscriptionStatus::Active))
        .with_subscription(subscription(2, SubscriptionStatus::InAppeal))
        .with_subscription(subscription(3, SubscriptionStatus::Cancelled));
    let service = service(subs, MockPlanRepository::new());

    let all = service.list_subscriptions(StatusFilter::All).await.unwrap();
    assert_eq!(all.len(), 3);

    let appealing = service
        .list_subscriptions(StatusFilter::Only(SubscriptionStatus::InAppeal))
        .await
        .unwrap();
    assert_eq!(appealing.len(), 1);
    assert_eq!(appealing[0].id, 2);
}
