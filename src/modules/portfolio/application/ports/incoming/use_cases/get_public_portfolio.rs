use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::domain::render::RenderedSection;
use crate::modules::template::application::domain::entities::Template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicPortfolioRequest {
    pub owner: UserId,
    pub slug: String,
    /// Plain-text view password supplied by the visitor.
    pub password: Option<String>,
    /// Raw visitor identity (address and agent); hashed by the tracker.
    pub visitor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicPortfolio {
    pub portfolio: Portfolio,
    pub template: Option<Template>,
    pub sections: Vec<RenderedSection>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPublicPortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Portfolio is password protected")]
    PasswordRequired,

    #[error("Invalid portfolio password")]
    InvalidPassword,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetPublicPortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        request: PublicPortfolioRequest,
    ) -> Result<PublicPortfolio, GetPublicPortfolioError>;
}
