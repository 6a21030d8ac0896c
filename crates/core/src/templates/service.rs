//! Template service - core business logic

use std::sync::Arc;

use cobrix_domain::{
    CobrixError, DunningConfig, MessageKind, Result, Template, TemplateDraft,
};
use tracing::{debug, info};

use super::ports::{ScheduleRepository, TemplateRepository};
use super::schedule::Schedule;

/// Partial update applied to a template; unset fields keep their value
#[derive(Debug, Clone, Default)]
pub struct TemplateUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub messages: Option<std::collections::BTreeMap<MessageKind, String>>,
}

/// Template and schedule service
pub struct TemplateService {
    templates: Arc<dyn TemplateRepository>,
    schedules: Arc<dyn ScheduleRepository>,
    config: DunningConfig,
}

impl TemplateService {
    /// Create a new template service with the default dunning settings.
    pub fn new(
        templates: Arc<dyn TemplateRepository>,
        schedules: Arc<dyn ScheduleRepository>,
    ) -> Self {
        Self::with_config(templates, schedules, DunningConfig::default())
    }

    /// Create a template service with explicit dunning settings.
    pub fn with_config(
        templates: Arc<dyn TemplateRepository>,
        schedules: Arc<dyn ScheduleRepository>,
        config: DunningConfig,
    ) -> Self {
        Self { templates, schedules, config }
    }

    /// Create a template. All five message slots must be non-empty and the
    /// name must be unique (case-insensitive).
    pub async fn add_template(&self, draft: TemplateDraft) -> Result<Template> {
        validate_slots(&draft)?;

        let existing = self.templates.find_all().await?;
        if existing.iter().any(|t| t.name.eq_ignore_ascii_case(&draft.name)) {
            return Err(CobrixError::Conflict(format!(
                "a template named '{}' already exists",
                draft.name
            )));
        }
        let next_id = existing.iter().map(|t| t.id).max().unwrap_or(0) + 1;

        let template = Template {
            id: next_id,
            name: draft.name,
            description: draft.description,
            messages: draft.messages,
        };
        self.templates.insert(template.clone()).await?;
        info!(template_id = template.id, name = %template.name, "template created");
        Ok(template)
    }

    /// Merge partial fields into a template.
    pub async fn update_template(&self, id: i64, update: TemplateUpdate) -> Result<Template> {
        let mut template = self
            .templates
            .find_by_id(id)
            .await?
            .ok_or_else(|| CobrixError::NotFound(format!("template {id} not found")))?;

        if let Some(name) = update.name {
            let existing = self.templates.find_all().await?;
            if existing.iter().any(|t| t.id != id && t.name.eq_ignore_ascii_case(&name)) {
                return Err(CobrixError::Conflict(format!(
                    "a template named '{name}' already exists"
                )));
            }
            template.name = name;
        }
        if let Some(description) = update.description {
            template.description = description;
        }
        if let Some(messages) = update.messages {
            for (kind, text) in messages {
                template.messages.insert(kind, text);
            }
        }

        self.templates.update(template.clone()).await?;
        Ok(template)
    }

    /// Delete a template by id.
    pub async fn delete_template(&self, id: i64) -> Result<()> {
        self.templates.delete(id).await
    }

    /// List every template.
    pub async fn list_templates(&self) -> Result<Vec<Template>> {
        self.templates.find_all().await
    }

    /// Load the persisted schedule for a template into an editable value
    /// capped at the configured message limit.
    pub async fn load_schedule(&self, template_id: i64) -> Result<Schedule> {
        self.require_template(template_id).await?;
        let entries = self.schedules.schedule_for(template_id).await?;
        Ok(Schedule::from_entries(entries, self.config.max_scheduled_messages))
    }

    /// Persist a schedule for a template. When restore-on-reload is enabled
    /// the template is also recorded as last selected.
    pub async fn save_schedule(&self, template_id: i64, schedule: &Schedule) -> Result<()> {
        self.require_template(template_id).await?;
        self.schedules.save_schedule(template_id, schedule.entries()).await?;
        if self.config.restore_last_template {
            self.schedules.set_last_template(template_id).await?;
        }
        debug!(template_id, entries = schedule.len(), "schedule saved");
        Ok(())
    }

    /// Template id to restore on reload, if one was saved and restoring is
    /// enabled.
    pub async fn last_selected_template(&self) -> Result<Option<i64>> {
        if !self.config.restore_last_template {
            return Ok(None);
        }
        self.schedules.last_template().await
    }

    async fn require_template(&self, id: i64) -> Result<Template> {
        self.templates
            .find_by_id(id)
            .await?
            .ok_or_else(|| CobrixError::NotFound(format!("template {id} not found")))
    }
}

/// Creation-mode rule: every one of the five slots must carry text.
fn validate_slots(draft: &TemplateDraft) -> Result<()> {
    for kind in MessageKind::ALL {
        let filled = draft
            .messages
            .get(&kind)
            .is_some_and(|text| !text.trim().is_empty());
        if !filled {
            return Err(CobrixError::Validation(format!(
                "message slot {kind:?} must not be empty"
            )));
        }
    }
    Ok(())
}
