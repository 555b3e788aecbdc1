use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisitorTrackerError {
    #[error("Tracker unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait VisitorTracker: Send + Sync {
    /// True the first time `fingerprint` is seen for the portfolio within the
    /// tracking window.
    async fn first_visit(
        &self,
        portfolio_id: Uuid,
        fingerprint: &str,
    ) -> Result<bool, VisitorTrackerError>;
}
