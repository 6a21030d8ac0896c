//! Key-value-backed template store and schedule map.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use cobrix_core::templates::ports::{ScheduleRepository, TemplateRepository};
use cobrix_core::KeyValueStore;
use cobrix_domain::constants::{KEY_LAST_TEMPLATE, KEY_SCHEDULES, KEY_TEMPLATES};
use cobrix_domain::{CobrixError, Result, ScheduledMessage, Template};

use super::collections::{load_collection, load_value, save_collection, save_value};

/// Templates stored as one JSON array under [`KEY_TEMPLATES`].
pub struct KvTemplateRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvTemplateRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TemplateRepository for KvTemplateRepository {
    async fn find_all(&self) -> Result<Vec<Template>> {
        load_collection(self.store.as_ref(), KEY_TEMPLATES).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Template>> {
        let templates: Vec<Template> = load_collection(self.store.as_ref(), KEY_TEMPLATES).await?;
        Ok(templates.into_iter().find(|template| template.id == id))
    }

    async fn insert(&self, template: Template) -> Result<()> {
        let mut templates: Vec<Template> =
            load_collection(self.store.as_ref(), KEY_TEMPLATES).await?;
        templates.push(template);
        save_collection(self.store.as_ref(), KEY_TEMPLATES, &templates).await
    }

    async fn update(&self, template: Template) -> Result<()> {
        let mut templates: Vec<Template> =
            load_collection(self.store.as_ref(), KEY_TEMPLATES).await?;
        match templates.iter_mut().find(|existing| existing.id == template.id) {
            Some(slot) => *slot = template,
            None => {
                return Err(CobrixError::NotFound(format!("template {} not found", template.id)))
            }
        }
        save_collection(self.store.as_ref(), KEY_TEMPLATES, &templates).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut templates: Vec<Template> =
            load_collection(self.store.as_ref(), KEY_TEMPLATES).await?;
        let before = templates.len();
        templates.retain(|template| template.id != id);
        if templates.len() == before {
            return Err(CobrixError::NotFound(format!("template {id} not found")));
        }
        save_collection(self.store.as_ref(), KEY_TEMPLATES, &templates).await
    }
}

/// All schedules live in one JSON object under [`KEY_SCHEDULES`], keyed by
/// template id; the last-selected marker is a bare id under
/// [`KEY_LAST_TEMPLATE`].
pub struct KvScheduleRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvScheduleRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn schedule_map(&self) -> Result<BTreeMap<String, Vec<ScheduledMessage>>> {
        Ok(load_value(self.store.as_ref(), KEY_SCHEDULES).await?.unwrap_or_default())
    }
}

#[async_trait]
impl ScheduleRepository for KvScheduleRepository {
    async fn schedule_for(&self, template_id: i64) -> Result<Vec<ScheduledMessage>> {
        let mut map = self.schedule_map().await?;
        Ok(map.remove(&template_id.to_string()).unwrap_or_default())
    }

    async fn save_schedule(&self, template_id: i64, entries: Vec<ScheduledMessage>) -> Result<()> {
        let mut map = self.schedule_map().await?;
        map.insert(template_id.to_string(), entries);
        save_value(self.store.as_ref(), KEY_SCHEDULES, &map).await
    }

    async fn set_last_template(&self, template_id: i64) -> Result<()> {
        save_value(self.store.as_ref(), KEY_LAST_TEMPLATE, &template_id).await
    }

    async fn last_template(&self) -> Result<Option<i64>> {
        load_value(self.store.as_ref(), KEY_LAST_TEMPLATE).await
    }
}
