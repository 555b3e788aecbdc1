use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeletePortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Portfolio belongs to another user")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePortfolioUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, portfolio_id: Uuid) -> Result<(), DeletePortfolioError>;
}
