//! In-memory template store
//!
//! Backs tests and offline editing sessions. Mirrors the data service's
//! semantics: snowflake ids on first save, timestamps stamped on every save.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use shared::models::TemplateDocument;
use shared::util::{now_millis, snowflake_id};
use tracing::debug;

use crate::TemplateStore;
use crate::error::{StoreError, StoreResult};

/// Template store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    templates: Mutex<HashMap<i64, TemplateDocument>>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored templates
    pub fn len(&self) -> usize {
        self.templates.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn save(&self, doc: &TemplateDocument) -> StoreResult<i64> {
        if doc.name.trim().is_empty() {
            return Err(StoreError::Validation("Template name must not be empty".into()));
        }

        let mut templates = self.templates.lock().expect("store lock poisoned");
        let now = now_millis();
        let mut stored = doc.clone();

        let id = match doc.id {
            Some(id) => {
                let previous = templates
                    .get(&id)
                    .ok_or_else(|| StoreError::NotFound(format!("Template {id} not found")))?;
                stored.created_at = previous.created_at;
                id
            }
            None => {
                stored.created_at = Some(now);
                snowflake_id()
            }
        };
        stored.id = Some(id);
        stored.updated_at = Some(now);
        templates.insert(id, stored);
        debug!(id, "template stored");
        Ok(id)
    }

    async fn load(&self, id: i64) -> StoreResult<TemplateDocument> {
        let templates = self.templates.lock().expect("store lock poisoned");
        templates
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Template {id} not found")))
    }
}
