use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::render::{RenderMode, RenderedSection};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPortfolio {
    pub portfolio_id: Uuid,
    pub mode: RenderMode,
    pub sections: Vec<RenderedSection>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderPortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Portfolio belongs to another user")]
    Forbidden,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait RenderPortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        mode: RenderMode,
    ) -> Result<RenderedPortfolio, RenderPortfolioError>;
}
