use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::customization::{
    CustomizationError, CustomizationPatch,
};
use crate::modules::portfolio::application::domain::entities::Portfolio;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CustomizePortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Portfolio belongs to another user")]
    Forbidden,

    #[error("Template not found")]
    TemplateNotFound,

    #[error(transparent)]
    Invalid(#[from] CustomizationError),

    #[error("No free slug left for this title")]
    SlugExhausted,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CustomizePortfolioUseCase: Send + Sync {
    /// All or nothing: on error the stored portfolio is unchanged.
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        patch: CustomizationPatch,
    ) -> Result<Portfolio, CustomizePortfolioError>;
}
