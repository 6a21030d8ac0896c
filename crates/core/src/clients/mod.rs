//! Client registry
//!
//! CRUD over customer records plus CSV/JSON bulk import.

pub mod import;
pub mod ports;
pub mod service;

pub use service::{ClientService, ImportReport};
