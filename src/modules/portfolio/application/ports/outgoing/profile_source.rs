use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileSourceError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only access to account profiles and plan tiers.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// `None` when the account does not exist or is deleted. Accounts without
    /// a profile row get an empty profile on the free plan.
    async fn find_profile(&self, owner: UserId) -> Result<Option<UserProfile>, ProfileSourceError>;
}
