use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordShareError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RecordShareUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, slug: &str) -> Result<(), RecordShareError>;
}
