use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListPortfoliosError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListPortfoliosUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<Portfolio>, ListPortfoliosError>;
}
