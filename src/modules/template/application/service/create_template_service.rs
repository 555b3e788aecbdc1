use async_trait::async_trait;

use crate::modules::template::application::domain::entities::{
    validate_sections, Template, TemplateValidationError,
};
use crate::modules::template::application::ports::incoming::use_cases::{
    CreateTemplateError, CreateTemplateUseCase,
};
use crate::modules::template::application::ports::outgoing::{
    CreateTemplateData, TemplateRepository, TemplateRepositoryError,
};
use crate::shared::slug::slugify;

pub struct CreateTemplateService<R>
where
    R: TemplateRepository,
{
    template_repository: R,
}

impl<R> CreateTemplateService<R>
where
    R: TemplateRepository,
{
    pub fn new(template_repository: R) -> Self {
        Self {
            template_repository,
        }
    }
}

fn normalize(mut data: CreateTemplateData) -> Result<CreateTemplateData, TemplateValidationError> {
    data.name = data.name.trim().to_string();
    if data.name.is_empty() {
        return Err(TemplateValidationError::EmptyName);
    }

    let source = if data.slug.trim().is_empty() {
        &data.name
    } else {
        &data.slug
    };
    data.slug = slugify(source);
    if data.slug.is_empty() {
        return Err(TemplateValidationError::EmptySlug);
    }

    if data.price < 0 {
        return Err(TemplateValidationError::NegativePrice);
    }

    validate_sections(&data.sections)?;
    Ok(data)
}

#[async_trait]
impl<R> CreateTemplateUseCase for CreateTemplateService<R>
where
    R: TemplateRepository + Send + Sync,
{
    async fn execute(&self, data: CreateTemplateData) -> Result<Template, CreateTemplateError> {
        let data = normalize(data)?;

        self.template_repository
            .create_template(data)
            .await
            .map_err(|e| match e {
                TemplateRepositoryError::SlugAlreadyExists => {
                    CreateTemplateError::SlugAlreadyExists
                }
                other => CreateTemplateError::RepositoryError(other.to_string()),
            })
    }
}
