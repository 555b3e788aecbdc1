use async_trait::async_trait;

/// A visitor's contact-form submission, addressed to the portfolio owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub owner_email: String,
    pub portfolio_title: String,
    pub sender_name: String,
    pub sender_email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify_owner(&self, message: ContactMessage) -> Result<(), ContactNotificationError>;
}
