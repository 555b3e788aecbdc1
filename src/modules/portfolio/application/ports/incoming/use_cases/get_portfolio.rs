use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Portfolio belongs to another user")]
    Forbidden,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, portfolio_id: Uuid)
        -> Result<Portfolio, GetPortfolioError>;
}
