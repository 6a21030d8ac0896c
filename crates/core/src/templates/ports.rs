//! Port interfaces for template and schedule persistence

use async_trait::async_trait;
use cobrix_domain::{Result, ScheduledMessage, Template};

/// Trait for template persistence and retrieval
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// List every template
    async fn find_all(&self) -> Result<Vec<Template>>;

    /// Get a template by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Template>>;

    /// Append a new template
    async fn insert(&self, template: Template) -> Result<()>;

    /// Replace an existing template record
    async fn update(&self, template: Template) -> Result<()>;

    /// Delete a template by id
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Trait for the per-template schedule map and the last-selected marker
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Get the persisted schedule for a template, empty when none saved
    async fn schedule_for(&self, template_id: i64) -> Result<Vec<ScheduledMessage>>;

    /// Persist the schedule for a template
    async fn save_schedule(
        &self,
        template_id: i64,
        entries: Vec<ScheduledMessage>,
    ) -> Result<()>;

    /// Record the template id to restore on reload
    async fn set_last_template(&self, template_id: i64) -> Result<()>;

    /// Get the last selected template id, if any
    async fn last_template(&self) -> Result<Option<i64>>;
}
