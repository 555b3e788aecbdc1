use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::support::{load_owned, with_slug_candidates, LookupError, SlugRetryError};
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::{Portfolio, PortfolioStats};
use crate::modules::portfolio::application::domain::slug::duplicate_base;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DuplicatePortfolioError, DuplicatePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepository,
};

pub struct DuplicatePortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    portfolio_query: Q,
    portfolio_repository: R,
}

impl<Q, R> DuplicatePortfolioService<Q, R>
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

impl From<LookupError> for DuplicatePortfolioError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound => DuplicatePortfolioError::NotFound,
            LookupError::Forbidden => DuplicatePortfolioError::Forbidden,
            LookupError::Query(msg) => DuplicatePortfolioError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<Q, R> DuplicatePortfolioUseCase for DuplicatePortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<Portfolio, DuplicatePortfolioError> {
        let original = load_owned(&self.portfolio_query, owner, portfolio_id).await?;

        let now = Utc::now();
        let copy = Portfolio {
            id: Uuid::new_v4(),
            title: format!("{} (Copy)", original.title),
            slug: String::new(),
            stats: PortfolioStats::default(),
            is_published: false,
            is_draft: true,
            published_at: None,
            created_at: now,
            updated_at: now,
            ..original.clone()
        };

        let base = duplicate_base(&original.slug);
        let repo = &self.portfolio_repository;

        let created = with_slug_candidates(&base, |candidate| {
            let mut next = copy.clone();
            next.slug = candidate;
            repo.insert(next)
        })
        .await
        .map_err(|e| match e {
            SlugRetryError::Exhausted => DuplicatePortfolioError::SlugExhausted,
            SlugRetryError::Repository(e) => {
                DuplicatePortfolioError::RepositoryError(e.to_string())
            }
        })?;

        info!(source_id = %original.id, portfolio_id = %created.id, "Portfolio duplicated");
        Ok(created)
    }
}
