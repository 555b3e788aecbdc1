use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::support::{load_published, LookupError};
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::domain::render::{render, RenderMode};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPublicPortfolioError, GetPublicPortfolioUseCase, PublicPortfolio, PublicPortfolioRequest,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PasswordHasher, PortfolioQuery, PortfolioRepository, StatCounter, VisitorTracker,
};
use crate::modules::template::application::ports::outgoing::TemplateQuery;

pub struct GetPublicPortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    portfolio_query: Q,
    portfolio_repository: R,
    template_query: Arc<dyn TemplateQuery + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    visitor_tracker: Arc<dyn VisitorTracker + Send + Sync>,
}

impl<Q, R> GetPublicPortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(
        portfolio_query: Q,
        portfolio_repository: R,
        template_query: Arc<dyn TemplateQuery + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        visitor_tracker: Arc<dyn VisitorTracker + Send + Sync>,
    ) -> Self {
        Self {
            portfolio_query,
            portfolio_repository,
            template_query,
            password_hasher,
            visitor_tracker,
        }
    }

    async fn check_password(
        &self,
        portfolio: &Portfolio,
        supplied: Option<&str>,
    ) -> Result<(), GetPublicPortfolioError> {
        let Some(hash) = portfolio.settings.password_hash.as_deref() else {
            return Ok(());
        };
        let supplied = supplied
            .filter(|p| !p.is_empty())
            .ok_or(GetPublicPortfolioError::PasswordRequired)?;

        let matches = self
            .password_hasher
            .verify_password(supplied, hash)
            .await
            .map_err(|e| GetPublicPortfolioError::QueryError(e.to_string()))?;

        if matches {
            Ok(())
        } else {
            Err(GetPublicPortfolioError::InvalidPassword)
        }
    }

    /// Counter failures never fail the page view.
    async fn record_view(&self, portfolio: &Portfolio, visitor: Option<&str>) {
        if let Err(e) = self
            .portfolio_repository
            .increment(portfolio.id, StatCounter::Views)
            .await
        {
            warn!(portfolio_id = %portfolio.id, error = %e, "Failed to record view");
        }

        let Some(visitor) = visitor else {
            return;
        };

        match self.visitor_tracker.first_visit(portfolio.id, visitor).await {
            Ok(true) => {
                if let Err(e) = self
                    .portfolio_repository
                    .increment(portfolio.id, StatCounter::UniqueVisitors)
                    .await
                {
                    warn!(portfolio_id = %portfolio.id, error = %e, "Failed to record visitor");
                }
            }
            Ok(false) => debug!(portfolio_id = %portfolio.id, "Returning visitor"),
            Err(e) => warn!(portfolio_id = %portfolio.id, error = %e, "Visitor tracking unavailable"),
        }
    }
}

impl From<LookupError> for GetPublicPortfolioError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound | LookupError::Forbidden => GetPublicPortfolioError::NotFound,
            LookupError::Query(msg) => GetPublicPortfolioError::QueryError(msg),
        }
    }
}

#[async_trait]
impl<Q, R> GetPublicPortfolioUseCase for GetPublicPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: PublicPortfolioRequest,
    ) -> Result<PublicPortfolio, GetPublicPortfolioError> {
        let portfolio = load_published(&self.portfolio_query, request.owner, &request.slug).await?;

        self.check_password(&portfolio, request.password.as_deref())
            .await?;

        if portfolio.settings.analytics_enabled {
            self.record_view(&portfolio, request.visitor.as_deref())
                .await;
        }

        let template = match self.template_query.find_by_id(portfolio.template_id).await {
            Ok(template) => template,
            Err(e) => {
                warn!(portfolio_id = %portfolio.id, error = %e, "Template lookup failed for public view");
                None
            }
        };

        let sections = render(&portfolio, template.as_ref(), RenderMode::View);

        Ok(PublicPortfolio {
            portfolio,
            template,
            sections,
        })
    }
}
