use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::template::application::ports::incoming::use_cases::{
    DeleteTemplateError, DeleteTemplateUseCase,
};
use crate::modules::template::application::ports::outgoing::{
    TemplateRepository, TemplateRepositoryError,
};

pub struct DeleteTemplateService<R>
where
    R: TemplateRepository,
{
    template_repository: R,
}

impl<R> DeleteTemplateService<R>
where
    R: TemplateRepository,
{
    pub fn new(template_repository: R) -> Self {
        Self {
            template_repository,
        }
    }
}

#[async_trait]
impl<R> DeleteTemplateUseCase for DeleteTemplateService<R>
where
    R: TemplateRepository + Send + Sync,
{
    async fn execute(&self, template_id: Uuid) -> Result<(), DeleteTemplateError> {
        self.template_repository
            .delete_template(template_id)
            .await
            .map_err(|e| match e {
                TemplateRepositoryError::NotFound => DeleteTemplateError::NotFound,
                TemplateRepositoryError::InUse => DeleteTemplateError::InUse,
                other => DeleteTemplateError::RepositoryError(other.to_string()),
            })
    }
}
