use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::template::application::domain::entities::{
    Template, TemplateValidationError,
};
use crate::modules::template::application::ports::outgoing::PatchTemplateData;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatchTemplateError {
    #[error("Template not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] TemplateValidationError),

    #[error("Template slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchTemplateUseCase: Send + Sync {
    async fn execute(
        &self,
        template_id: Uuid,
        data: PatchTemplateData,
    ) -> Result<Template, PatchTemplateError>;
}
