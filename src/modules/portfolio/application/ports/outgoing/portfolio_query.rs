use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    async fn find_by_id(&self, portfolio_id: Uuid) -> Result<Option<Portfolio>, PortfolioQueryError>;

    /// Slug comparison is case-insensitive.
    async fn find_by_owner_and_slug(
        &self,
        owner: UserId,
        slug: &str,
    ) -> Result<Option<Portfolio>, PortfolioQueryError>;

    /// Most recently updated first.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Portfolio>, PortfolioQueryError>;
}
