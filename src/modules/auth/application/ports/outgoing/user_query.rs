use async_trait::async_trait;
use uuid::Uuid;

/// The slice of an account needed to resolve a public URL segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountHandle {
    pub id: Uuid,
    pub username: String,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserQueryError {
    #[error("Account lookup failed: {0}")]
    Unavailable(String),
}

/// Read-only view over accounts owned by the account service.
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Exact match on the stored username, soft-deleted rows included.
    async fn find_by_username(&self, username: &str)
        -> Result<Option<AccountHandle>, UserQueryError>;
}
