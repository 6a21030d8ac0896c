//! Company/account registry
//!
//! Registration, login and profile editing for the single tenant company.

pub mod ports;
pub mod service;

pub use service::AccountService;
