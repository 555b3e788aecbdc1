use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::support::{load_owned, with_slug_candidates, LookupError, SlugRetryError};
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::customization::{
    apply_customization, CustomizationPatch,
};
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CustomizePortfolioError, CustomizePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PasswordHasher, PortfolioQuery, PortfolioRepository,
};
use crate::modules::template::application::ports::outgoing::TemplateQuery;
use crate::shared::patch::PatchField;

pub struct CustomizePortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    portfolio_query: Q,
    portfolio_repository: R,
    template_query: Arc<dyn TemplateQuery + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CustomizePortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(
        portfolio_query: Q,
        portfolio_repository: R,
        template_query: Arc<dyn TemplateQuery + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            portfolio_query,
            portfolio_repository,
            template_query,
            password_hasher,
        }
    }

    /// Swaps a plain-text view password for its hash. An empty password
    /// removes the protection.
    async fn hash_view_password(
        &self,
        mut patch: CustomizationPatch,
    ) -> Result<CustomizationPatch, CustomizePortfolioError> {
        let Some(settings) = patch.settings.as_mut() else {
            return Ok(patch);
        };

        if let PatchField::Value(password) = &settings.password {
            if password.is_empty() {
                settings.password = PatchField::Null;
            } else {
                let hash = self
                    .password_hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| CustomizePortfolioError::RepositoryError(e.to_string()))?;
                settings.password = PatchField::Value(hash);
            }
        }

        Ok(patch)
    }
}

impl From<LookupError> for CustomizePortfolioError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound => CustomizePortfolioError::NotFound,
            LookupError::Forbidden => CustomizePortfolioError::Forbidden,
            LookupError::Query(msg) => CustomizePortfolioError::RepositoryError(msg),
        }
    }
}

impl From<SlugRetryError> for CustomizePortfolioError {
    fn from(e: SlugRetryError) -> Self {
        match e {
            SlugRetryError::Exhausted => CustomizePortfolioError::SlugExhausted,
            SlugRetryError::Repository(e) => CustomizePortfolioError::RepositoryError(e.to_string()),
        }
    }
}

#[async_trait]
impl<Q, R> CustomizePortfolioUseCase for CustomizePortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        patch: CustomizationPatch,
    ) -> Result<Portfolio, CustomizePortfolioError> {
        let current = load_owned(&self.portfolio_query, owner, portfolio_id).await?;

        let template = self
            .template_query
            .find_by_id(current.template_id)
            .await
            .map_err(|e| CustomizePortfolioError::RepositoryError(e.to_string()))?
            .ok_or(CustomizePortfolioError::TemplateNotFound)?;

        let patch = self.hash_view_password(patch).await?;

        let customized = apply_customization(&current, patch, &template).map_err(|e| {
            warn!(portfolio_id = %portfolio_id, error = %e, "Rejected customization");
            e
        })?;

        let repo = &self.portfolio_repository;
        let saved = if customized.slug_changed {
            let next = customized.portfolio;
            let base = next.slug.clone();
            with_slug_candidates(&base, |candidate| {
                let mut attempt = next.clone();
                attempt.slug = candidate;
                repo.save(attempt)
            })
            .await?
        } else {
            repo.save(customized.portfolio)
                .await
                .map_err(|e| CustomizePortfolioError::RepositoryError(e.to_string()))?
        };

        info!(portfolio_id = %portfolio_id, slug = %saved.slug, "Portfolio customized");
        Ok(saved)
    }
}
