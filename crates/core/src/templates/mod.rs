//! Message template and schedule model
//!
//! Named templates with five fixed message slots, a bounded day-offset
//! schedule per template, and a rule-based message generator.

pub mod generator;
pub mod ports;
pub mod schedule;
pub mod service;

pub use schedule::Schedule;
pub use service::{TemplateService, TemplateUpdate};
