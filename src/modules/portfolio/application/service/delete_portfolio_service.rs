use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::support::{load_owned, LookupError};
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeletePortfolioError, DeletePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepository, PortfolioRepositoryError,
};

pub struct DeletePortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    portfolio_query: Q,
    portfolio_repository: R,
}

impl<Q, R> DeletePortfolioService<Q, R>
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

impl From<LookupError> for DeletePortfolioError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound => DeletePortfolioError::NotFound,
            LookupError::Forbidden => DeletePortfolioError::Forbidden,
            LookupError::Query(msg) => DeletePortfolioError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<Q, R> DeletePortfolioUseCase for DeletePortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, portfolio_id: Uuid) -> Result<(), DeletePortfolioError> {
        // Loaded first so a foreign id reports Forbidden rather than NotFound.
        load_owned(&self.portfolio_query, owner, portfolio_id).await?;

        self.portfolio_repository
            .delete(owner, portfolio_id)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => DeletePortfolioError::NotFound,
                other => DeletePortfolioError::RepositoryError(other.to_string()),
            })?;

        info!(portfolio_id = %portfolio_id, owner = %owner, "Portfolio deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::domain::entities::test_fixtures::portfolio_for;
    use crate::modules::portfolio::application::domain::entities::Portfolio;
    use crate::modules::portfolio::application::service::test_doubles::InMemoryPortfolios;
    use crate::modules::template::application::domain::entities::test_fixtures::{
        section, template_with,
    };

    fn sample(owner: UserId) -> Portfolio {
        portfolio_for(owner, &template_with(vec![section("hero", "hero")]))
    }

    #[tokio::test]
    async fn owner_deletes_portfolio() {
        let owner = UserId::from(Uuid::new_v4());
        let portfolio = sample(owner);
        let store = InMemoryPortfolios::with(vec![portfolio.clone()]);
        let svc = DeletePortfolioService::new(store.clone(), store.clone());

        svc.execute(owner, portfolio.id).await.unwrap();

        assert!(store.get(portfolio.id).is_none());
    }

    #[tokio::test]
    async fn foreign_portfolio_is_forbidden_and_kept() {
        let portfolio = sample(UserId::from(Uuid::new_v4()));
        let store = InMemoryPortfolios::with(vec![portfolio.clone()]);
        let svc = DeletePortfolioService::new(store.clone(), store.clone());

        let result = svc.execute(UserId::from(Uuid::new_v4()), portfolio.id).await;

        assert_eq!(result, Err(DeletePortfolioError::Forbidden));
        assert!(store.get(portfolio.id).is_some());
    }

    #[tokio::test]
    async fn missing_portfolio_is_not_found() {
        let store = InMemoryPortfolios::default();
        let svc = DeletePortfolioService::new(store.clone(), store);

        let result = svc
            .execute(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert_eq!(result, Err(DeletePortfolioError::NotFound));
    }
}
