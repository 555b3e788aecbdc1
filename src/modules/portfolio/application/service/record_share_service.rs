use async_trait::async_trait;
use tracing::info;

use super::support::{load_published, LookupError};
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    RecordShareError, RecordShareUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepository, StatCounter,
};

pub struct RecordShareService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    portfolio_query: Q,
    portfolio_repository: R,
}

impl<Q, R> RecordShareService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(portfolio_query: Q, portfolio_repository: R) -> Self {
        Self {
            portfolio_query,
            portfolio_repository,
        }
    }
}

impl From<LookupError> for RecordShareError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound | LookupError::Forbidden => RecordShareError::NotFound,
            LookupError::Query(msg) => RecordShareError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<Q, R> RecordShareUseCase for RecordShareService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, slug: &str) -> Result<(), RecordShareError> {
        let portfolio = load_published(&self.portfolio_query, owner, slug).await?;

        self.portfolio_repository
            .increment(portfolio.id, StatCounter::Shares)
            .await
            .map_err(|e| RecordShareError::RepositoryError(e.to_string()))?;

        info!(portfolio_id = %portfolio.id, "Portfolio shared");
        Ok(())
    }
}
