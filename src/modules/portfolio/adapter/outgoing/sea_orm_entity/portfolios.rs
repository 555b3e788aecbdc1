use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::entities::{
    ActiveSections, Portfolio, PortfolioSettings, PortfolioStats,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQueryError, PortfolioRepositoryError,
};

/// Content, styling and SEO are JSONB documents; settings and stats are
/// plain columns so counters can be incremented in place.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub template_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    /// Unique per owner, case-insensitively (`idx_portfolios_user_slug`).
    #[sea_orm(column_type = "Text")]
    pub slug: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub active_sections: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub custom_data: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub custom_styling: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub seo_settings: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub custom_domain: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub view_password_hash: Option<String>,

    pub analytics_enabled: bool,

    pub views: i64,
    pub unique_visitors: i64,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub last_viewed: Option<DateTimeWithTimeZone>,

    pub shares: i64,
    pub contact_forms: i64,

    pub is_published: bool,
    pub is_draft: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub published_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::template::adapter::outgoing::sea_orm_entity::templates::Entity",
        from = "Column::TemplateId",
        to = "crate::modules::template::adapter::outgoing::sea_orm_entity::templates::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Template,
}

impl Related<crate::modules::template::adapter::outgoing::sea_orm_entity::templates::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Template.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        Ok(self)
    }
}

//
// ──────────────────────────────────────────────────────────
// Mapping
// ──────────────────────────────────────────────────────────
//

impl Model {
    pub fn into_domain(self) -> Result<Portfolio, String> {
        Ok(Portfolio {
            id: self.id,
            owner: UserId::from(self.user_id),
            template_id: self.template_id,
            title: self.title,
            slug: self.slug,
            active_sections: ActiveSections::from_stored(from_json(self.active_sections)?),
            custom_data: from_json(self.custom_data)?,
            custom_styling: from_json(self.custom_styling)?,
            seo_settings: from_json(self.seo_settings)?,
            settings: PortfolioSettings {
                custom_domain: self.custom_domain,
                password_hash: self.view_password_hash,
                analytics_enabled: self.analytics_enabled,
            },
            stats: PortfolioStats {
                views: self.views,
                unique_visitors: self.unique_visitors,
                last_viewed: self.last_viewed.map(Into::into),
                shares: self.shares,
                contact_forms: self.contact_forms,
            },
            is_published: self.is_published,
            is_draft: self.is_draft,
            published_at: self.published_at.map(Into::into),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

/// Every column except the stats counters, which only `increment` touches.
pub(crate) fn document_columns(
    portfolio: &Portfolio,
) -> Result<ActiveModel, PortfolioRepositoryError> {
    Ok(ActiveModel {
        id: Set(portfolio.id),
        user_id: Set(portfolio.owner.value()),
        template_id: Set(portfolio.template_id),
        title: Set(portfolio.title.clone()),
        slug: Set(portfolio.slug.clone()),
        active_sections: Set(to_json(&portfolio.active_sections)?),
        custom_data: Set(to_json(&portfolio.custom_data)?),
        custom_styling: Set(to_json(&portfolio.custom_styling)?),
        seo_settings: Set(to_json(&portfolio.seo_settings)?),
        custom_domain: Set(portfolio.settings.custom_domain.clone()),
        view_password_hash: Set(portfolio.settings.password_hash.clone()),
        analytics_enabled: Set(portfolio.settings.analytics_enabled),
        is_published: Set(portfolio.is_published),
        is_draft: Set(portfolio.is_draft),
        published_at: Set(portfolio.published_at.map(|t| t.fixed_offset())),
        ..Default::default()
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, PortfolioRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| PortfolioRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(json: serde_json::Value) -> Result<T, String> {
    serde_json::from_value(json).map_err(|e| e.to_string())
}

pub(crate) fn repository_err(msg: String) -> PortfolioRepositoryError {
    PortfolioRepositoryError::SerializationError(msg)
}

pub(crate) fn query_err(msg: String) -> PortfolioQueryError {
    PortfolioQueryError::SerializationError(msg)
}
