use async_trait::async_trait;

use crate::modules::template::application::domain::entities::Template;
use crate::modules::template::application::ports::outgoing::TemplateListFilter;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListTemplatesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListTemplatesUseCase: Send + Sync {
    async fn execute(&self, filter: TemplateListFilter) -> Result<Vec<Template>, ListTemplatesError>;
}
