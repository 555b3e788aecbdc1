use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::template::application::domain::entities::{
    CustomizationOptions, Template, TemplateCategory, TemplateSection,
};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTemplateData {
    pub name: String,
    /// Already normalized by the use case.
    pub slug: String,
    pub description: String,
    pub category: TemplateCategory,
    pub is_premium: bool,
    pub price: i64,
    pub is_active: bool,
    pub preview_image: Option<String>,
    pub sections: Vec<TemplateSection>,
    pub customization_options: CustomizationOptions,
}

/// Patch semantics:
/// - scalars: Unset => keep, Value => replace
/// - preview_image: Null => clear
/// - sections/customization_options: Value => replace whole document
#[derive(Debug, Clone, Default)]
pub struct PatchTemplateData {
    pub name: PatchField<String>,
    pub slug: PatchField<String>,
    pub description: PatchField<String>,
    pub category: PatchField<TemplateCategory>,
    pub is_premium: PatchField<bool>,
    pub price: PatchField<i64>,
    pub is_active: PatchField<bool>,
    pub preview_image: PatchField<String>,
    pub sections: PatchField<Vec<TemplateSection>>,
    pub customization_options: PatchField<CustomizationOptions>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemplateRepositoryError {
    #[error("Template not found")]
    NotFound,

    /// Global unique slug violated.
    #[error("Slug already exists")]
    SlugAlreadyExists,

    /// Still referenced by at least one portfolio.
    #[error("Template is in use")]
    InUse,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn create_template(
        &self,
        data: CreateTemplateData,
    ) -> Result<Template, TemplateRepositoryError>;

    async fn patch_template(
        &self,
        template_id: Uuid,
        data: PatchTemplateData,
    ) -> Result<Template, TemplateRepositoryError>;

    async fn delete_template(&self, template_id: Uuid) -> Result<(), TemplateRepositoryError>;
}
