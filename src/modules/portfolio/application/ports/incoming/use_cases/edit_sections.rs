use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::customization::CustomizationError;
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::domain::section_edit::{SectionEdit, SectionEditError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditSectionsError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Portfolio belongs to another user")]
    Forbidden,

    #[error("Template not found")]
    TemplateNotFound,

    #[error(transparent)]
    InvalidEdit(#[from] SectionEditError),

    #[error(transparent)]
    Invalid(#[from] CustomizationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditSectionsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        section_id: &str,
        edits: Vec<SectionEdit>,
    ) -> Result<Portfolio, EditSectionsError>;
}
