use async_trait::async_trait;
use serde::Deserialize;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    /// The owner notification is sent in the background; its failure does
    /// not fail the submission.
    async fn execute(
        &self,
        owner: UserId,
        slug: &str,
        form: ContactForm,
    ) -> Result<(), SubmitContactError>;
}
