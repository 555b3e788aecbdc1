use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::support::{with_slug_candidates, SlugRetryError};
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::autofill;
use crate::modules::portfolio::application::domain::entities::{
    ActiveSections, Portfolio, PortfolioSettings, PortfolioStats, SeoSettings,
};
use crate::modules::portfolio::application::domain::slug::base_slug;
use crate::modules::portfolio::application::domain::styling::CustomStyling;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioError, CreatePortfolioInput, CreatePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{PortfolioRepository, ProfileSource};
use crate::modules::template::application::ports::outgoing::TemplateQuery;

pub struct CreatePortfolioService<R>
where
    R: PortfolioRepository,
{
    portfolio_repository: R,
    template_query: Arc<dyn TemplateQuery + Send + Sync>,
    profile_source: Arc<dyn ProfileSource + Send + Sync>,
}

impl<R> CreatePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(
        portfolio_repository: R,
        template_query: Arc<dyn TemplateQuery + Send + Sync>,
        profile_source: Arc<dyn ProfileSource + Send + Sync>,
    ) -> Self {
        Self {
            portfolio_repository,
            template_query,
            profile_source,
        }
    }
}

#[async_trait]
impl<R> CreatePortfolioUseCase for CreatePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        input: CreatePortfolioInput,
    ) -> Result<Portfolio, CreatePortfolioError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(CreatePortfolioError::EmptyTitle);
        }

        let template = self
            .template_query
            .find_by_id(input.template_id)
            .await
            .map_err(|e| CreatePortfolioError::RepositoryError(e.to_string()))?
            .filter(|t| t.is_active)
            .ok_or(CreatePortfolioError::TemplateNotFound)?;

        let profile = self
            .profile_source
            .find_profile(owner)
            .await
            .map_err(|e| CreatePortfolioError::RepositoryError(e.to_string()))?
            .ok_or(CreatePortfolioError::UserNotFound)?;

        if template.is_premium && !profile.is_pro() {
            return Err(CreatePortfolioError::PremiumTemplate);
        }

        let custom_data = if input.auto_fill {
            autofill::generate(&profile, &template)
        } else {
            autofill::blank(&template)
        };

        let now = Utc::now();
        let draft = Portfolio {
            id: Uuid::new_v4(),
            owner,
            template_id: template.id,
            title: title.clone(),
            slug: String::new(),
            active_sections: ActiveSections::all_of(&template),
            custom_data,
            custom_styling: CustomStyling::default(),
            seo_settings: SeoSettings {
                meta_title: Some(title.clone()),
                meta_description: profile.bio.clone(),
                ..SeoSettings::default()
            },
            settings: PortfolioSettings::default(),
            stats: PortfolioStats::default(),
            is_published: false,
            is_draft: true,
            published_at: None,
            created_at: now,
            updated_at: now,
        };

        let base = base_slug(input.slug.as_deref().unwrap_or(&title));
        let repo = &self.portfolio_repository;

        let created = with_slug_candidates(&base, |candidate| {
            let mut next = draft.clone();
            next.slug = candidate;
            repo.insert(next)
        })
        .await
        .map_err(|e| match e {
            SlugRetryError::Exhausted => CreatePortfolioError::SlugExhausted,
            SlugRetryError::Repository(e) => CreatePortfolioError::RepositoryError(e.to_string()),
        })?;

        info!(
            portfolio_id = %created.id,
            owner = %owner,
            template_id = %template.id,
            auto_fill = input.auto_fill,
            "Portfolio created"
        );

        Ok(created)
    }
}
