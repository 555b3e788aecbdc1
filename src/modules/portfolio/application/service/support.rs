use std::future::Future;

use tracing::debug;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::domain::slug::SlugCandidates;
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Owner-scoped lookup
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    NotFound,
    Forbidden,
    Query(String),
}

pub async fn load_owned<Q>(
    query: &Q,
    owner: UserId,
    portfolio_id: Uuid,
) -> Result<Portfolio, LookupError>
where
    Q: PortfolioQuery + ?Sized,
{
    let portfolio = query
        .find_by_id(portfolio_id)
        .await
        .map_err(|e| LookupError::Query(e.to_string()))?
        .ok_or(LookupError::NotFound)?;

    if !portfolio.is_owned_by(owner) {
        return Err(LookupError::Forbidden);
    }

    Ok(portfolio)
}

/// Published portfolio addressed by its public `/{username}/{slug}` path.
pub async fn load_published<Q>(
    query: &Q,
    owner: UserId,
    slug: &str,
) -> Result<Portfolio, LookupError>
where
    Q: PortfolioQuery + ?Sized,
{
    match query.find_by_owner_and_slug(owner, slug).await {
        Ok(Some(portfolio)) if portfolio.is_published => Ok(portfolio),
        Ok(_) => Err(LookupError::NotFound),
        Err(e) => Err(LookupError::Query(e.to_string())),
    }
}

//
// ──────────────────────────────────────────────────────────
// Slug retry
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum SlugRetryError {
    Exhausted,
    Repository(PortfolioRepositoryError),
}

/// Runs `attempt` with `base`, `base-1`, `base-2`, ... until the store stops
/// reporting a slug collision.
pub async fn with_slug_candidates<F, Fut>(
    base: &str,
    mut attempt: F,
) -> Result<Portfolio, SlugRetryError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Portfolio, PortfolioRepositoryError>>,
{
    for candidate in SlugCandidates::new(base) {
        match attempt(candidate.clone()).await {
            Ok(portfolio) => return Ok(portfolio),
            Err(PortfolioRepositoryError::SlugTaken) => {
                debug!(slug = %candidate, "Slug taken, trying next candidate");
            }
            Err(e) => return Err(SlugRetryError::Repository(e)),
        }
    }

    Err(SlugRetryError::Exhausted)
}
