use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use super::content::CustomData;
use super::styling::CustomStyling;
use crate::auth::application::domain::entities::UserId;
use crate::modules::template::application::domain::entities::Template;

//
// ──────────────────────────────────────────────────────────
// Active sections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSectionsError {
    #[error("Unknown section ids: {}", .0.join(", "))]
    Unknown(Vec<String>),
    #[error("Duplicate section ids: {}", .0.join(", "))]
    Duplicate(Vec<String>),
}

/// Ordered section ids shown by the renderer. Empty means "all sections".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveSections(Vec<String>);

impl ActiveSections {
    /// Every id must be declared by the template and appear at most once.
    pub fn validated(ids: Vec<String>, template: &Template) -> Result<Self, InvalidSectionsError> {
        let unknown = template.unknown_section_ids(&ids);
        if !unknown.is_empty() {
            return Err(InvalidSectionsError::Unknown(unknown));
        }

        let mut seen = HashSet::new();
        let mut repeated: Vec<String> = Vec::new();
        for id in &ids {
            if !seen.insert(id.as_str()) && !repeated.contains(id) {
                repeated.push(id.clone());
            }
        }
        if !repeated.is_empty() {
            return Err(InvalidSectionsError::Duplicate(repeated));
        }

        Ok(Self(ids))
    }

    pub fn all_of(template: &Template) -> Self {
        Self(template.section_ids())
    }

    /// Ids read back from storage; they were validated when written.
    pub fn from_stored(ids: Vec<String>) -> Self {
        Self(ids)
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

//
// ──────────────────────────────────────────────────────────
// Settings
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoSettings {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub og_image: Option<String>,
}

fn serialize_has_password<S: Serializer>(
    hash: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(hash.is_some())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSettings {
    pub custom_domain: Option<String>,

    /// Argon2 hash of the view password. Only its presence is ever exposed.
    #[serde(
        rename = "has_password",
        serialize_with = "serialize_has_password",
        skip_deserializing
    )]
    pub password_hash: Option<String>,

    pub analytics_enabled: bool,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            custom_domain: None,
            password_hash: None,
            analytics_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub views: i64,
    pub unique_visitors: i64,
    pub last_viewed: Option<DateTime<Utc>>,
    pub shares: i64,
    pub contact_forms: i64,
}

//
// ──────────────────────────────────────────────────────────
// Portfolio
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: Uuid,
    pub owner: UserId,
    pub template_id: Uuid,
    pub title: String,
    pub slug: String,
    pub active_sections: ActiveSections,
    pub custom_data: CustomData,
    pub custom_styling: CustomStyling,
    pub seo_settings: SeoSettings,
    pub settings: PortfolioSettings,
    pub stats: PortfolioStats,
    pub is_published: bool,
    pub is_draft: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    pub fn is_owned_by(&self, owner: UserId) -> bool {
        self.owner == owner
    }

    /// `publishedAt` keeps the first publication time.
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.is_published = true;
        self.is_draft = false;
        if self.published_at.is_none() {
            self.published_at = Some(now);
        }
    }

    pub fn unpublish(&mut self) {
        self.is_published = false;
    }

    pub fn has_password(&self) -> bool {
        self.settings.password_hash.is_some()
    }
}
