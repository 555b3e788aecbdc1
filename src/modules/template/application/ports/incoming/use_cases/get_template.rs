use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::template::application::domain::entities::Template;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetTemplateError {
    #[error("Template not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetTemplateUseCase: Send + Sync {
    /// Inactive templates are only visible when `include_inactive` is set.
    async fn execute(
        &self,
        template_id: Uuid,
        include_inactive: bool,
    ) -> Result<Template, GetTemplateError>;
}
