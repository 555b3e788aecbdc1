use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::support::{load_owned, LookupError};
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    PublishPortfolioError, PublishPortfolioUseCase, UnpublishPortfolioError,
    UnpublishPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepository, ProfileSource,
};
use crate::modules::template::application::ports::outgoing::TemplateQuery;

//
// ──────────────────────────────────────────────────────────
// Publish
// ──────────────────────────────────────────────────────────
//

pub struct PublishPortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    portfolio_query: Q,
    portfolio_repository: R,
    template_query: Arc<dyn TemplateQuery + Send + Sync>,
    profile_source: Arc<dyn ProfileSource + Send + Sync>,
}

impl<Q, R> PublishPortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(
        portfolio_query: Q,
        portfolio_repository: R,
        template_query: Arc<dyn TemplateQuery + Send + Sync>,
        profile_source: Arc<dyn ProfileSource + Send + Sync>,
    ) -> Self {
        Self {
            portfolio_query,
            portfolio_repository,
            template_query,
            profile_source,
        }
    }
}

impl From<LookupError> for PublishPortfolioError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound => PublishPortfolioError::NotFound,
            LookupError::Forbidden => PublishPortfolioError::Forbidden,
            LookupError::Query(msg) => PublishPortfolioError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<Q, R> PublishPortfolioUseCase for PublishPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<Portfolio, PublishPortfolioError> {
        let mut portfolio = load_owned(&self.portfolio_query, owner, portfolio_id).await?;

        let profile = self
            .profile_source
            .find_profile(owner)
            .await
            .map_err(|e| PublishPortfolioError::RepositoryError(e.to_string()))?
            .ok_or(PublishPortfolioError::UserNotFound)?;

        // A template that has since been removed cannot be premium.
        let template_is_premium = self
            .template_query
            .find_by_id(portfolio.template_id)
            .await
            .map_err(|e| PublishPortfolioError::RepositoryError(e.to_string()))?
            .is_some_and(|t| t.is_premium);

        if template_is_premium && !profile.is_pro() {
            return Err(PublishPortfolioError::PremiumTemplate);
        }

        portfolio.publish(Utc::now());
        let saved = self
            .portfolio_repository
            .save(portfolio)
            .await
            .map_err(|e| PublishPortfolioError::RepositoryError(e.to_string()))?;

        // Siblings go down only once this one is saved.
        if !profile.is_pro() {
            let unpublished = self
                .portfolio_repository
                .unpublish_others(owner, saved.id)
                .await
                .map_err(|e| PublishPortfolioError::RepositoryError(e.to_string()))?;
            if unpublished > 0 {
                info!(owner = %owner, unpublished, "Free plan: unpublished previous portfolios");
            }
        }

        info!(portfolio_id = %saved.id, slug = %saved.slug, "Portfolio published");
        Ok(saved)
    }
}

//
// ──────────────────────────────────────────────────────────
// Unpublish
// ──────────────────────────────────────────────────────────
//

pub struct UnpublishPortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    portfolio_query: Q,
    portfolio_repository: R,
}

impl<Q, R> UnpublishPortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(portfolio_query: Q, portfolio_repository: R) -> Self {
        Self {
            portfolio_query,
            portfolio_repository,
        }
    }
}

impl From<LookupError> for UnpublishPortfolioError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound => UnpublishPortfolioError::NotFound,
            LookupError::Forbidden => UnpublishPortfolioError::Forbidden,
            LookupError::Query(msg) => UnpublishPortfolioError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<Q, R> UnpublishPortfolioUseCase for UnpublishPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<Portfolio, UnpublishPortfolioError> {
        let mut portfolio = load_owned(&self.portfolio_query, owner, portfolio_id).await?;

        portfolio.unpublish();
        let saved = self
            .portfolio_repository
            .save(portfolio)
            .await
            .map_err(|e| UnpublishPortfolioError::RepositoryError(e.to_string()))?;

        info!(portfolio_id = %saved.id, "Portfolio unpublished");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::domain::entities::test_fixtures::portfolio_for;
    use crate::modules::portfolio::application::domain::profile::test_fixtures::profile;
    use crate::modules::portfolio::application::domain::profile::{PlanTier, UserProfile};
    use crate::modules::portfolio::application::ports::outgoing::PortfolioRepositoryError;
    use crate::modules::portfolio::application::service::test_doubles::{
        FixedProfiles, FixedTemplates, InMemoryPortfolios,
    };
    use crate::modules::template::application::domain::entities::test_fixtures::{
        section, template_with,
    };
    use crate::modules::template::application::domain::entities::Template;
    use chrono::Duration;

    fn owner(plan: PlanTier) -> UserProfile {
        let mut p = profile("Grace Hopper");
        p.plan = plan;
        p
    }

    fn template(premium: bool) -> Template {
        let mut t = template_with(vec![section("hero", "hero")]);
        t.is_premium = premium;
        t
    }

    fn publish_service(
        store: &InMemoryPortfolios,
        template: Template,
        profile: UserProfile,
    ) -> PublishPortfolioService<InMemoryPortfolios, InMemoryPortfolios> {
        PublishPortfolioService::new(
            store.clone(),
            store.clone(),
            FixedTemplates::arc(vec![template]),
            FixedProfiles::arc(vec![profile]),
        )
    }

    #[tokio::test]
    async fn free_owner_keeps_only_one_published_portfolio() {
        let template = template(false);
        let profile = owner(PlanTier::Free);
        let mut live = portfolio_for(profile.user_id, &template);
        live.slug = "live".to_string();
        live.publish(Utc::now());
        let next = portfolio_for(profile.user_id, &template);
        let store = InMemoryPortfolios::with(vec![live.clone(), next.clone()]);
        let svc = publish_service(&store, template, profile.clone());

        let published = svc.execute(profile.user_id, next.id).await.unwrap();

        assert!(published.is_published);
        assert!(!published.is_draft);
        assert!(published.published_at.is_some());
        assert!(!store.get(live.id).unwrap().is_published);

        let again = svc.execute(profile.user_id, next.id).await.unwrap();

        assert!(again.is_published);
        assert!(store.get(next.id).unwrap().is_published);
        assert!(!store.get(live.id).unwrap().is_published);
    }

    #[tokio::test]
    async fn failed_save_leaves_current_portfolio_published() {
        let template = template(false);
        let profile = owner(PlanTier::Free);
        let mut live = portfolio_for(profile.user_id, &template);
        live.slug = "live".to_string();
        live.publish(Utc::now());
        let next = portfolio_for(profile.user_id, &template);
        let store = InMemoryPortfolios::with(vec![live.clone(), next.clone()]);
        store.fail_saves(PortfolioRepositoryError::DatabaseError("boom".to_string()));
        let svc = publish_service(&store, template, profile.clone());

        let res = svc.execute(profile.user_id, next.id).await;

        assert!(matches!(res, Err(PublishPortfolioError::RepositoryError(_))));
        assert!(store.get(live.id).unwrap().is_published);
        assert!(!store.get(next.id).unwrap().is_published);
    }

    #[tokio::test]
    async fn pro_owner_may_publish_many() {
        let template = template(false);
        let profile = owner(PlanTier::Pro);
        let mut live = portfolio_for(profile.user_id, &template);
        live.slug = "live".to_string();
        live.publish(Utc::now());
        let next = portfolio_for(profile.user_id, &template);
        let store = InMemoryPortfolios::with(vec![live.clone(), next.clone()]);
        let svc = publish_service(&store, template, profile.clone());

        svc.execute(profile.user_id, next.id).await.unwrap();

        assert!(store.get(live.id).unwrap().is_published);
    }

    #[tokio::test]
    async fn republishing_keeps_first_publication_time() {
        let template = template(false);
        let profile = owner(PlanTier::Free);
        let mut portfolio = portfolio_for(profile.user_id, &template);
        let first = Utc::now() - Duration::days(3);
        portfolio.publish(first);
        portfolio.is_draft = true;
        let store = InMemoryPortfolios::with(vec![portfolio.clone()]);
        let svc = publish_service(&store, template, profile.clone());

        let published = svc.execute(profile.user_id, portfolio.id).await.unwrap();

        assert_eq!(published.published_at, Some(first));
        assert!(!published.is_draft);
    }

    #[tokio::test]
    async fn premium_template_blocks_free_owner() {
        let template = template(true);
        let profile = owner(PlanTier::Free);
        let portfolio = portfolio_for(profile.user_id, &template);
        let store = InMemoryPortfolios::with(vec![portfolio.clone()]);
        let svc = publish_service(&store, template, profile.clone());

        let result = svc.execute(profile.user_id, portfolio.id).await;

        assert_eq!(result, Err(PublishPortfolioError::PremiumTemplate));
        assert!(!store.get(portfolio.id).unwrap().is_published);
    }

    #[tokio::test]
    async fn missing_portfolio_is_not_found() {
        let profile = owner(PlanTier::Free);
        let store = InMemoryPortfolios::default();
        let svc = publish_service(&store, template(false), profile.clone());

        let result = svc.execute(profile.user_id, Uuid::new_v4()).await;

        assert_eq!(result, Err(PublishPortfolioError::NotFound));
    }

    #[tokio::test]
    async fn unpublish_keeps_publication_time() {
        let template = template(false);
        let owner_id = UserId::from(Uuid::new_v4());
        let mut portfolio = portfolio_for(owner_id, &template);
        portfolio.publish(Utc::now());
        let store = InMemoryPortfolios::with(vec![portfolio.clone()]);
        let svc = UnpublishPortfolioService::new(store.clone(), store.clone());

        let saved = svc.execute(owner_id, portfolio.id).await.unwrap();

        assert!(!saved.is_published);
        assert_eq!(saved.published_at, portfolio.published_at);
    }

    #[tokio::test]
    async fn unpublish_by_other_owner_is_forbidden() {
        let template = template(false);
        let portfolio = portfolio_for(UserId::from(Uuid::new_v4()), &template);
        let store = InMemoryPortfolios::with(vec![portfolio.clone()]);
        let svc = UnpublishPortfolioService::new(store.clone(), store);

        let result = svc.execute(UserId::from(Uuid::new_v4()), portfolio.id).await;

        assert_eq!(result, Err(UnpublishPortfolioError::Forbidden));
    }
}
