use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteImageError {
    #[error("Image not found")]
    NotFound,

    #[error("Image belongs to another user")]
    Forbidden,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait DeleteImageUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, public_id: &str) -> Result<(), DeleteImageError>;
}
