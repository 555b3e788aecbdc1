use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DuplicatePortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Portfolio belongs to another user")]
    Forbidden,

    #[error("No free slug left for the copy")]
    SlugExhausted,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DuplicatePortfolioUseCase: Send + Sync {
    /// The copy is an unpublished draft with fresh stats.
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<Portfolio, DuplicatePortfolioError>;
}
