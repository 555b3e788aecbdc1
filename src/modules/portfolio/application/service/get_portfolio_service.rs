use async_trait::async_trait;
use uuid::Uuid;

use super::support::{load_owned, LookupError};
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;

pub struct GetPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    portfolio_query: Q,
}

impl<Q> GetPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(portfolio_query: Q) -> Self {
        Self { portfolio_query }
    }
}

impl From<LookupError> for GetPortfolioError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound => GetPortfolioError::NotFound,
            LookupError::Forbidden => GetPortfolioError::Forbidden,
            LookupError::Query(msg) => GetPortfolioError::QueryError(msg),
        }
    }
}

#[async_trait]
impl<Q> GetPortfolioUseCase for GetPortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<Portfolio, GetPortfolioError> {
        Ok(load_owned(&self.portfolio_query, owner, portfolio_id).await?)
    }
}
