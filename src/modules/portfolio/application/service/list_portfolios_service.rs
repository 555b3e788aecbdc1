use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ListPortfoliosError, ListPortfoliosUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;

pub struct ListPortfoliosService<Q>
where
    Q: PortfolioQuery,
{
    portfolio_query: Q,
}

impl<Q> ListPortfoliosService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(portfolio_query: Q) -> Self {
        Self { portfolio_query }
    }
}

#[async_trait]
impl<Q> ListPortfoliosUseCase for ListPortfoliosService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<Portfolio>, ListPortfoliosError> {
        self.portfolio_query
            .list_by_owner(owner)
            .await
            .map_err(|e| ListPortfoliosError::QueryError(e.to_string()))
    }
}
