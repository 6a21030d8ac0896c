//! Application configuration structures
//!
//! Deserialized from environment variables or a JSON/TOML config file by the
//! infra layer.

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub dunning: DunningConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file backing the key-value store
    pub path: String,
    /// Connection pool size
    pub pool_size: u32,
}

/// Dunning/communication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DunningConfig {
    /// Maximum scheduled messages per template
    pub max_scheduled_messages: usize,
    /// Whether schedule persistence restores the last selected template
    pub restore_last_template: bool,
}

impl Default for DunningConfig {
    fn default() -> Self {
        Self {
            max_scheduled_messages: crate::constants::MAX_SCHEDULED_MESSAGES,
            restore_last_template: true,
        }
    }
}
