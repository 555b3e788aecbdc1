use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatePortfolioInput {
    pub template_id: Uuid,
    pub title: String,
    /// Derived from the title when omitted.
    #[serde(default)]
    pub slug: Option<String>,
    /// Seed content from the owner's profile instead of the template defaults.
    #[serde(default)]
    pub auto_fill: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreatePortfolioError {
    #[error("Template not found")]
    TemplateNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Premium template requires a pro plan")]
    PremiumTemplate,

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("No free slug left for this title")]
    SlugExhausted,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        input: CreatePortfolioInput,
    ) -> Result<Portfolio, CreatePortfolioError>;
}
