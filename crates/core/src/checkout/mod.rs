//! Checkout workflow
//!
//! Strictly linear three-step flow ending in a submitted record awaiting
//! manual review. Pure state machine, no persistence.

pub mod flow;

pub use flow::{CheckoutFlow, SubmitError};
