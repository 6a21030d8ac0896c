//! Database implementations

pub mod client_repository;
mod collections;
pub mod company_repository;
pub mod invoice_repository;
pub mod kv_store;
pub mod manager;
pub mod memory;
pub mod subscription_repository;
pub mod template_repository;

pub use client_repository::*;
pub use company_repository::*;
pub use invoice_repository::*;
pub use kv_store::*;
pub use manager::*;
pub use memory::*;
pub use subscription_repository::*;
pub use template_repository::*;
