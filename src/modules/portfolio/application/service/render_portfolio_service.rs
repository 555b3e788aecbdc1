use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::support::{load_owned, LookupError};
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::render::{render, RenderMode};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    RenderPortfolioError, RenderPortfolioUseCase, RenderedPortfolio,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;
use crate::modules::template::application::ports::outgoing::TemplateQuery;

pub struct RenderPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    portfolio_query: Q,
    template_query: Arc<dyn TemplateQuery + Send + Sync>,
}

impl<Q> RenderPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(portfolio_query: Q, template_query: Arc<dyn TemplateQuery + Send + Sync>) -> Self {
        Self {
            portfolio_query,
            template_query,
        }
    }
}

impl From<LookupError> for RenderPortfolioError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound => RenderPortfolioError::NotFound,
            LookupError::Forbidden => RenderPortfolioError::Forbidden,
            LookupError::Query(msg) => RenderPortfolioError::QueryError(msg),
        }
    }
}

#[async_trait]
impl<Q> RenderPortfolioUseCase for RenderPortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        mode: RenderMode,
    ) -> Result<RenderedPortfolio, RenderPortfolioError> {
        let portfolio = load_owned(&self.portfolio_query, owner, portfolio_id).await?;

        // Rendering degrades to the stored section ids when the template is gone.
        let template = match self.template_query.find_by_id(portfolio.template_id).await {
            Ok(template) => template,
            Err(e) => {
                warn!(portfolio_id = %portfolio_id, error = %e, "Template lookup failed during render");
                None
            }
        };

        Ok(RenderedPortfolio {
            portfolio_id,
            mode,
            sections: render(&portfolio, template.as_ref(), mode),
        })
    }
}
