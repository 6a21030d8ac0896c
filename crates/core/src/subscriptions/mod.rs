//! Subscription and plan model
//!
//! Associates clients with plans, tracks status transitions and next-payment
//! dates.

pub mod ports;
pub mod service;

pub use service::SubscriptionService;
