use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::support::{load_published, LookupError};
use crate::auth::application::domain::entities::UserId;
use crate::email::application::ports::outgoing::{ContactMessage, ContactNotifier};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ContactForm, SubmitContactError, SubmitContactUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepository, ProfileSource, StatCounter,
};

const MAX_MESSAGE_CHARS: usize = 5000;

pub struct SubmitContactService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    portfolio_query: Q,
    portfolio_repository: R,
    profile_source: Arc<dyn ProfileSource + Send + Sync>,
    notifier: Arc<dyn ContactNotifier + Send + Sync>,
}

impl<Q, R> SubmitContactService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(
        portfolio_query: Q,
        portfolio_repository: R,
        profile_source: Arc<dyn ProfileSource + Send + Sync>,
        notifier: Arc<dyn ContactNotifier + Send + Sync>,
    ) -> Self {
        Self {
            portfolio_query,
            portfolio_repository,
            profile_source,
            notifier,
        }
    }
}

fn validate(form: &ContactForm) -> Result<(), SubmitContactError> {
    if form.name.trim().is_empty() {
        return Err(SubmitContactError::Validation(
            "Name is required".to_string(),
        ));
    }
    if !EmailAddress::is_valid(form.email.trim()) {
        return Err(SubmitContactError::Validation(
            "A valid email address is required".to_string(),
        ));
    }
    let message = form.message.trim();
    if message.is_empty() {
        return Err(SubmitContactError::Validation(
            "Message is required".to_string(),
        ));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(SubmitContactError::Validation(format!(
            "Message must be at most {MAX_MESSAGE_CHARS} characters"
        )));
    }
    Ok(())
}

impl From<LookupError> for SubmitContactError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound | LookupError::Forbidden => SubmitContactError::NotFound,
            LookupError::Query(msg) => SubmitContactError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<Q, R> SubmitContactUseCase for SubmitContactService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        slug: &str,
        form: ContactForm,
    ) -> Result<(), SubmitContactError> {
        validate(&form)?;

        let portfolio = load_published(&self.portfolio_query, owner, slug).await?;

        self.portfolio_repository
            .increment(portfolio.id, StatCounter::ContactForms)
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))?;

        info!(portfolio_id = %portfolio.id, "Contact form received");

        let owner_email = match self.profile_source.find_profile(owner).await {
            Ok(Some(profile)) if !profile.email.is_empty() => profile.email,
            Ok(_) => {
                warn!(owner = %owner, "No owner email on file, skipping notification");
                return Ok(());
            }
            Err(e) => {
                warn!(owner = %owner, error = %e, "Owner lookup failed, skipping notification");
                return Ok(());
            }
        };

        let message = ContactMessage {
            owner_email,
            portfolio_title: portfolio.title,
            sender_name: form.name.trim().to_string(),
            sender_email: form.email.trim().to_string(),
            message: form.message.trim().to_string(),
        };

        let notifier = Arc::clone(&self.notifier);
        let portfolio_id = portfolio.id;
        tokio::spawn(async move {
            if let Err(e) = notifier.notify_owner(message).await {
                error!(portfolio_id = %portfolio_id, error = %e, "Failed to notify portfolio owner");
            }
        });

        Ok(())
    }
}
