use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;

/// Engagement counters incremented in place by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCounter {
    /// Also stamps `last_viewed`.
    Views,
    UniqueVisitors,
    Shares,
    ContactForms,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Portfolio not found")]
    NotFound,

    /// `(owner, lower(slug))` unique index violated.
    #[error("Slug already taken")]
    SlugTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn insert(&self, portfolio: Portfolio) -> Result<Portfolio, PortfolioRepositoryError>;

    /// Whole-document save (last write wins). Stats are owned by
    /// `increment` and are never written here.
    async fn save(&self, portfolio: Portfolio) -> Result<Portfolio, PortfolioRepositoryError>;

    async fn delete(&self, owner: UserId, portfolio_id: Uuid)
        -> Result<(), PortfolioRepositoryError>;

    /// Unpublishes every published portfolio of `owner` except `keep`, in one
    /// statement. Returns the number of rows touched.
    async fn unpublish_others(
        &self,
        owner: UserId,
        keep: Uuid,
    ) -> Result<u64, PortfolioRepositoryError>;

    async fn increment(
        &self,
        portfolio_id: Uuid,
        counter: StatCounter,
    ) -> Result<(), PortfolioRepositoryError>;
}
