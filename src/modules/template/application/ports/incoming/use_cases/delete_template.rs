use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteTemplateError {
    #[error("Template not found")]
    NotFound,

    #[error("Template is used by existing portfolios")]
    InUse,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTemplateUseCase: Send + Sync {
    async fn execute(&self, template_id: Uuid) -> Result<(), DeleteTemplateError>;
}
