use std::sync::Arc;

use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

/// Usernames longer than this never match an account.
pub const MAX_USERNAME_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveUserIdError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for ResolveUserIdError {
    fn from(err: UserQueryError) -> Self {
        match err {
            UserQueryError::Unavailable(msg) => ResolveUserIdError::RepositoryError(msg),
        }
    }
}

/// Maps public usernames (as they appear in portfolio URLs) to owner ids.
#[derive(Clone)]
pub struct UserIdentityResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl UserIdentityResolver {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    pub async fn by_username(&self, username: &str) -> Result<UserId, ResolveUserIdError> {
        let username = username.trim();
        if username.is_empty() || username.len() > MAX_USERNAME_LEN {
            debug!(len = username.len(), "Username segment out of range");
            return Err(ResolveUserIdError::NotFound);
        }

        self.user_query
            .find_by_username(username)
            .await?
            .filter(|account| !account.is_deleted)
            .map(|account| UserId::from(account.id))
            .ok_or(ResolveUserIdError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::auth::application::ports::outgoing::user_query::AccountHandle;

    /// Serves a fixed account list and records every lookup.
    #[derive(Default)]
    struct Directory {
        accounts: Vec<AccountHandle>,
        fail: bool,
        lookups: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl UserQuery for Directory {
        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<AccountHandle>, UserQueryError> {
            self.lookups.lock().unwrap().push(username.to_string());
            if self.fail {
                return Err(UserQueryError::Unavailable("db down".to_string()));
            }
            Ok(self
                .accounts
                .iter()
                .find(|a| a.username == username)
                .cloned())
        }
    }

    fn account(username: &str, is_deleted: bool) -> AccountHandle {
        AccountHandle {
            id: Uuid::new_v4(),
            username: username.to_string(),
            is_deleted,
        }
    }

    fn resolver(directory: Directory) -> (UserIdentityResolver, Arc<Directory>) {
        let directory = Arc::new(directory);
        (UserIdentityResolver::new(directory.clone()), directory)
    }

    #[tokio::test]
    async fn resolves_live_account_after_trimming() {
        let ada = account("ada", false);
        let (resolver, directory) = resolver(Directory {
            accounts: vec![ada.clone()],
            ..Directory::default()
        });

        assert_eq!(resolver.by_username("  ada ").await, Ok(UserId::from(ada.id)));
        assert_eq!(*directory.lookups.lock().unwrap(), vec!["ada".to_string()]);
    }

    #[tokio::test]
    async fn unknown_and_deleted_accounts_are_not_found() {
        let (resolver, _) = resolver(Directory {
            accounts: vec![account("gone", true)],
            ..Directory::default()
        });

        assert_eq!(resolver.by_username("gone").await, Err(ResolveUserIdError::NotFound));
        assert_eq!(resolver.by_username("missing").await, Err(ResolveUserIdError::NotFound));
    }

    #[tokio::test]
    async fn out_of_range_usernames_skip_the_lookup() {
        let (resolver, directory) = resolver(Directory::default());

        assert_eq!(resolver.by_username("   ").await, Err(ResolveUserIdError::NotFound));
        assert_eq!(
            resolver.by_username(&"x".repeat(MAX_USERNAME_LEN + 1)).await,
            Err(ResolveUserIdError::NotFound)
        );
        assert!(directory.lookups.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn lookup_failures_surface_as_repository_errors() {
        let (resolver, _) = resolver(Directory {
            fail: true,
            ..Directory::default()
        });

        assert_eq!(
            resolver.by_username("ada").await,
            Err(ResolveUserIdError::RepositoryError("db down".to_string()))
        );
    }
}
