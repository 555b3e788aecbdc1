use async_trait::async_trait;

use crate::modules::template::application::domain::entities::{
    Template, TemplateValidationError,
};
use crate::modules::template::application::ports::outgoing::CreateTemplateData;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateTemplateError {
    #[error(transparent)]
    Invalid(#[from] TemplateValidationError),

    #[error("Template slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTemplateUseCase: Send + Sync {
    /// An empty slug is derived from the name.
    async fn execute(&self, data: CreateTemplateData) -> Result<Template, CreateTemplateError>;
}
