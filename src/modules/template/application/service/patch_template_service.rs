use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::template::application::domain::entities::{
    validate_sections, Template, TemplateValidationError,
};
use crate::modules::template::application::ports::incoming::use_cases::{
    PatchTemplateError, PatchTemplateUseCase,
};
use crate::modules::template::application::ports::outgoing::{
    PatchTemplateData, TemplateRepository, TemplateRepositoryError,
};
use crate::shared::patch::PatchField;
use crate::shared::slug::slugify;

pub struct PatchTemplateService<R>
where
    R: TemplateRepository,
{
    template_repository: R,
}

impl<R> PatchTemplateService<R>
where
    R: TemplateRepository,
{
    pub fn new(template_repository: R) -> Self {
        Self {
            template_repository,
        }
    }
}

fn reject_null<T>(field: &PatchField<T>, name: &'static str) -> Result<(), TemplateValidationError> {
    if matches!(field, PatchField::Null) {
        Err(TemplateValidationError::NullField(name))
    } else {
        Ok(())
    }
}

/// Validates only the keys present in the patch; `preview_image` is the one
/// nullable column.
fn normalize(mut data: PatchTemplateData) -> Result<PatchTemplateData, TemplateValidationError> {
    reject_null(&data.name, "name")?;
    reject_null(&data.slug, "slug")?;
    reject_null(&data.description, "description")?;
    reject_null(&data.category, "category")?;
    reject_null(&data.is_premium, "is_premium")?;
    reject_null(&data.price, "price")?;
    reject_null(&data.is_active, "is_active")?;
    reject_null(&data.sections, "sections")?;
    reject_null(&data.customization_options, "customization_options")?;

    if let PatchField::Value(name) = &mut data.name {
        *name = name.trim().to_string();
        if name.is_empty() {
            return Err(TemplateValidationError::EmptyName);
        }
    }

    if let PatchField::Value(slug) = &mut data.slug {
        *slug = slugify(slug);
        if slug.is_empty() {
            return Err(TemplateValidationError::EmptySlug);
        }
    }

    if let PatchField::Value(price) = &data.price {
        if *price < 0 {
            return Err(TemplateValidationError::NegativePrice);
        }
    }

    if let PatchField::Value(sections) = &data.sections {
        validate_sections(sections)?;
    }

    Ok(data)
}

#[async_trait]
impl<R> PatchTemplateUseCase for PatchTemplateService<R>
where
    R: TemplateRepository + Send + Sync,
{
    async fn execute(
        &self,
        template_id: Uuid,
        data: PatchTemplateData,
    ) -> Result<Template, PatchTemplateError> {
        let data = normalize(data)?;

        self.template_repository
            .patch_template(template_id, data)
            .await
            .map_err(|e| match e {
                TemplateRepositoryError::NotFound => PatchTemplateError::NotFound,
                TemplateRepositoryError::SlugAlreadyExists => PatchTemplateError::SlugAlreadyExists,
                other => PatchTemplateError::RepositoryError(other.to_string()),
            })
    }
}
