//! In-memory ports shared by the portfolio service tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::email::application::ports::outgoing::{
    ContactMessage, ContactNotificationError, ContactNotifier,
};
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::domain::profile::UserProfile;
use crate::modules::portfolio::application::ports::outgoing::{
    HashError, PasswordHasher, PortfolioQuery, PortfolioQueryError, PortfolioRepository,
    PortfolioRepositoryError, ProfileSource, ProfileSourceError, StatCounter, VisitorTracker,
    VisitorTrackerError,
};
use crate::modules::template::application::domain::entities::Template;
use crate::modules::template::application::ports::outgoing::{
    TemplateListFilter, TemplateQuery, TemplateQueryError,
};

//
// ──────────────────────────────────────────────────────────
// Portfolio store
// ──────────────────────────────────────────────────────────
//

/// Enforces the `(owner, lower(slug))` uniqueness the database index provides.
#[derive(Clone, Default)]
pub struct InMemoryPortfolios {
    rows: Arc<Mutex<Vec<Portfolio>>>,
    write_failure: Arc<Mutex<Option<PortfolioRepositoryError>>>,
    save_failure: Arc<Mutex<Option<PortfolioRepositoryError>>>,
    pub saves: Arc<Mutex<usize>>,
}

impl InMemoryPortfolios {
    pub fn with(portfolios: Vec<Portfolio>) -> Self {
        let store = Self::default();
        *store.rows.lock().unwrap() = portfolios;
        store
    }

    pub fn fail_writes(&self, err: PortfolioRepositoryError) {
        *self.write_failure.lock().unwrap() = Some(err);
    }

    /// Fails `save` only; other writes keep working.
    pub fn fail_saves(&self, err: PortfolioRepositoryError) {
        *self.save_failure.lock().unwrap() = Some(err);
    }

    pub fn get(&self, id: Uuid) -> Option<Portfolio> {
        self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }

    pub fn all(&self) -> Vec<Portfolio> {
        self.rows.lock().unwrap().clone()
    }

    fn check_write(&self) -> Result<(), PortfolioRepositoryError> {
        match self.write_failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn slug_taken(rows: &[Portfolio], candidate: &Portfolio) -> bool {
        rows.iter().any(|p| {
            p.id != candidate.id
                && p.owner == candidate.owner
                && p.slug.to_lowercase() == candidate.slug.to_lowercase()
        })
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolios {
    async fn insert(&self, portfolio: Portfolio) -> Result<Portfolio, PortfolioRepositoryError> {
        self.check_write()?;
        let mut rows = self.rows.lock().unwrap();
        if Self::slug_taken(&rows, &portfolio) {
            return Err(PortfolioRepositoryError::SlugTaken);
        }
        rows.push(portfolio.clone());
        Ok(portfolio)
    }

    async fn save(&self, portfolio: Portfolio) -> Result<Portfolio, PortfolioRepositoryError> {
        self.check_write()?;
        if let Some(err) = self.save_failure.lock().unwrap().clone() {
            return Err(err);
        }
        let mut rows = self.rows.lock().unwrap();
        if Self::slug_taken(&rows, &portfolio) {
            return Err(PortfolioRepositoryError::SlugTaken);
        }
        let slot = rows
            .iter_mut()
            .find(|p| p.id == portfolio.id)
            .ok_or(PortfolioRepositoryError::NotFound)?;

        let mut saved = portfolio;
        saved.stats = slot.stats.clone();
        saved.updated_at = Utc::now();
        *slot = saved.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(saved)
    }

    async fn delete(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<(), PortfolioRepositoryError> {
        self.check_write()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| !(p.id == portfolio_id && p.owner == owner));
        if rows.len() == before {
            return Err(PortfolioRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn unpublish_others(
        &self,
        owner: UserId,
        keep: Uuid,
    ) -> Result<u64, PortfolioRepositoryError> {
        self.check_write()?;
        let mut touched = 0;
        for p in self.rows.lock().unwrap().iter_mut() {
            if p.owner == owner && p.id != keep && p.is_published {
                p.is_published = false;
                touched += 1;
            }
        }
        Ok(touched)
    }

    async fn increment(
        &self,
        portfolio_id: Uuid,
        counter: StatCounter,
    ) -> Result<(), PortfolioRepositoryError> {
        self.check_write()?;
        let mut rows = self.rows.lock().unwrap();
        let p = rows
            .iter_mut()
            .find(|p| p.id == portfolio_id)
            .ok_or(PortfolioRepositoryError::NotFound)?;
        match counter {
            StatCounter::Views => {
                p.stats.views += 1;
                p.stats.last_viewed = Some(Utc::now());
            }
            StatCounter::UniqueVisitors => p.stats.unique_visitors += 1,
            StatCounter::Shares => p.stats.shares += 1,
            StatCounter::ContactForms => p.stats.contact_forms += 1,
        }
        Ok(())
    }
}

#[async_trait]
impl PortfolioQuery for InMemoryPortfolios {
    async fn find_by_id(&self, portfolio_id: Uuid) -> Result<Option<Portfolio>, PortfolioQueryError> {
        Ok(self.get(portfolio_id))
    }

    async fn find_by_owner_and_slug(
        &self,
        owner: UserId,
        slug: &str,
    ) -> Result<Option<Portfolio>, PortfolioQueryError> {
        let slug = slug.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.owner == owner && p.slug.to_lowercase() == slug)
            .cloned())
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Portfolio>, PortfolioQueryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.owner == owner)
            .cloned()
            .collect())
    }
}

//
// ──────────────────────────────────────────────────────────
// Collaborators
// ──────────────────────────────────────────────────────────
//

pub struct FixedTemplates(pub Vec<Template>);

impl FixedTemplates {
    pub fn arc(templates: Vec<Template>) -> Arc<dyn TemplateQuery + Send + Sync> {
        Arc::new(Self(templates))
    }
}

#[async_trait]
impl TemplateQuery for FixedTemplates {
    async fn find_by_id(&self, template_id: Uuid) -> Result<Option<Template>, TemplateQueryError> {
        Ok(self.0.iter().find(|t| t.id == template_id).cloned())
    }

    async fn list(&self, _filter: TemplateListFilter) -> Result<Vec<Template>, TemplateQueryError> {
        Ok(self.0.clone())
    }
}

pub struct FixedProfiles(pub HashMap<UserId, UserProfile>);

impl FixedProfiles {
    pub fn arc(profiles: Vec<UserProfile>) -> Arc<dyn ProfileSource + Send + Sync> {
        Arc::new(Self(
            profiles.into_iter().map(|p| (p.user_id, p)).collect(),
        ))
    }
}

#[async_trait]
impl ProfileSource for FixedProfiles {
    async fn find_profile(&self, owner: UserId) -> Result<Option<UserProfile>, ProfileSourceError> {
        Ok(self.0.get(&owner).cloned())
    }
}

/// Deterministic stand-in for argon2: `hashed:<password>`.
pub struct PrefixHasher;

#[async_trait]
impl PasswordHasher for PrefixHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

#[derive(Default)]
pub struct MemoryVisitorTracker {
    seen: Mutex<HashSet<(Uuid, String)>>,
    unavailable: bool,
}

impl MemoryVisitorTracker {
    /// Fails every lookup, like an unreachable Redis.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl VisitorTracker for MemoryVisitorTracker {
    async fn first_visit(
        &self,
        portfolio_id: Uuid,
        fingerprint: &str,
    ) -> Result<bool, VisitorTrackerError> {
        if self.unavailable {
            return Err(VisitorTrackerError::Unavailable("redis down".to_string()));
        }
        Ok(self
            .seen
            .lock()
            .unwrap()
            .insert((portfolio_id, fingerprint.to_string())))
    }
}

/// Forwards every notification to a channel so tests can await the
/// background send.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<ContactMessage>,
    fail: bool,
}

impl ChannelNotifier {
    pub fn new(fail: bool) -> (Self, mpsc::UnboundedReceiver<ContactMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, fail }, rx)
    }
}

#[async_trait]
impl ContactNotifier for ChannelNotifier {
    async fn notify_owner(&self, message: ContactMessage) -> Result<(), ContactNotificationError> {
        let _ = self.tx.send(message);
        if self.fail {
            Err(ContactNotificationError::EmailSendingFailed(
                "smtp down".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
