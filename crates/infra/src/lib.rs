//! # Cobrix Infra
//!
//! Infrastructure adapters for Cobrix.
//!
//! This crate contains:
//! - The SQLite-backed key-value store and an in-memory alternative
//! - Key-value-backed implementations of every core repository port
//! - Configuration loading (environment variables or JSON/TOML files)
//! - Error conversions from external libraries into domain errors

pub mod config;
pub mod database;
pub mod errors;

pub use database::{
    DbManager, InMemoryKeyValueStore, KvClientRepository, KvCompanyRepository,
    KvInvoiceRepository, KvPlanRepository, KvScheduleRepository, KvSessionStore,
    KvSubscriptionRepository, KvTemplateRepository, SqliteKeyValueStore,
};
pub use errors::InfraError;
