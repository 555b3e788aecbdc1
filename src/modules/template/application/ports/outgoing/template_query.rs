use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::template::application::domain::entities::{Template, TemplateCategory};

/// Catalog filter; inactive templates are hidden unless asked for.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TemplateListFilter {
    pub category: Option<TemplateCategory>,
    pub is_premium: Option<bool>,
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemplateQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait TemplateQuery: Send + Sync {
    async fn find_by_id(&self, template_id: Uuid) -> Result<Option<Template>, TemplateQueryError>;

    async fn list(&self, filter: TemplateListFilter) -> Result<Vec<Template>, TemplateQueryError>;
}
