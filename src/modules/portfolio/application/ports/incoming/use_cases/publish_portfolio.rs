use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PublishPortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Portfolio belongs to another user")]
    Forbidden,

    #[error("User not found")]
    UserNotFound,

    #[error("Premium template requires a pro plan")]
    PremiumTemplate,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PublishPortfolioUseCase: Send + Sync {
    /// Free-tier owners keep at most one published portfolio.
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<Portfolio, PublishPortfolioError>;
}
