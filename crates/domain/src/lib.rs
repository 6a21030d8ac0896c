//! # Cobrix Domain
//!
//! Business domain types and models for Cobrix.
//!
//! This crate contains:
//! - Domain data types (Company, Client, Subscription, Invoice, Template)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (storage keys, limits)
//!
//! ## Architecture
//! - No dependencies on other Cobrix crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
