use async_trait::async_trait;
use deadpool_redis::{redis, Pool};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::{VisitorTracker, VisitorTrackerError};

/// Visitors count once per portfolio per day.
pub const VISITOR_WINDOW_SECS: u64 = 24 * 60 * 60;

/// Redis-backed unique visitor detection.
///
/// ```text
/// portfolio:visitor:{portfolio_id}:{sha256(fingerprint)} -> "1"   (TTL = window)
/// ```
///
/// `SET NX` makes the first request within the window the only one that
/// creates the key, so concurrent views of the same visitor count once.
#[derive(Clone)]
pub struct RedisVisitorTracker {
    pool: Arc<Pool>,
    window_secs: u64,
}

impl RedisVisitorTracker {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool,
            window_secs: VISITOR_WINDOW_SECS,
        }
    }

    fn visitor_key(portfolio_id: Uuid, fingerprint: &str) -> String {
        format!(
            "portfolio:visitor:{portfolio_id}:{}",
            hash_fingerprint(fingerprint)
        )
    }
}

/// Raw addresses never reach Redis.
fn hash_fingerprint(fingerprint: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(fingerprint.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl VisitorTracker for RedisVisitorTracker {
    async fn first_visit(
        &self,
        portfolio_id: Uuid,
        fingerprint: &str,
    ) -> Result<bool, VisitorTrackerError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| VisitorTrackerError::Unavailable(format!("Pool error: {e}")))?;

        let created: Option<String> = redis::cmd("SET")
            .arg(Self::visitor_key(portfolio_id, fingerprint))
            .arg("1")
            .arg("NX")
            .arg("EX")
            .arg(self.window_secs)
            .query_async(&mut conn)
            .await
            .map_err(|e| VisitorTrackerError::Unavailable(e.to_string()))?;

        Ok(created.is_some())
    }
}
