//! Invoice/transaction ledger
//!
//! Read-mostly billing records with a manual reconciliation workflow and a
//! receipt export.

pub mod ports;
pub mod receipt;
pub mod service;

pub use service::LedgerService;
