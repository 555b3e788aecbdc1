use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::modules::template::application::domain::entities::{Template, TemplateCategory};
use crate::modules::template::application::ports::outgoing::TemplateRepositoryError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text", unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub category: String,

    pub is_premium: bool,

    /// Cents.
    pub price: i64,

    pub is_active: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub preview_image: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub sections: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub customization_options: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::Entity"
    )]
    Portfolios,
}

impl Related<crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Portfolios.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        Ok(self)
    }
}

impl Model {
    pub fn into_domain(self) -> Result<Template, TemplateRepositoryError> {
        let category = self
            .category
            .parse::<TemplateCategory>()
            .map_err(TemplateRepositoryError::SerializationError)?;

        Ok(Template {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            category,
            is_premium: self.is_premium,
            price: self.price,
            is_active: self.is_active,
            preview_image: self.preview_image,
            sections: from_json(self.sections)?,
            customization_options: from_json(self.customization_options)?,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

pub(crate) fn to_json<T: serde::Serialize>(
    data: &T,
) -> Result<serde_json::Value, TemplateRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| TemplateRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: serde_json::Value,
) -> Result<T, TemplateRepositoryError> {
    serde_json::from_value(json)
        .map_err(|e| TemplateRepositoryError::SerializationError(e.to_string()))
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    pub fn template_model(id: Uuid, slug: &str) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            name: "Dev Folio".to_string(),
            slug: slug.to_string(),
            description: "For developers".to_string(),
            category: "developer".to_string(),
            is_premium: false,
            price: 0,
            is_active: true,
            preview_image: None,
            sections: json!([
                { "id": "hero", "type": "hero", "name": "Hero" },
                { "id": "work", "type": "projects", "name": "Work" }
            ]),
            customization_options: json!({ "colors": ["#000000"] }),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::template_model;
    use super::*;
    use crate::modules::template::application::domain::entities::SectionKind;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn before_save_trims_name_and_leaves_updated_at_to_the_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let active = ActiveModel {
            name: Set(" Dev Folio ".to_string()),
            ..Default::default()
        };

        let saved = active.before_save(&db, false).await.unwrap();

        assert_eq!(saved.name, Set("Dev Folio".to_string()));
        assert!(saved.updated_at.is_not_set());
    }

    #[test]
    fn into_domain_parses_sections_and_category() {
        let template = template_model(Uuid::new_v4(), "dev-folio").into_domain().unwrap();

        assert_eq!(template.category, TemplateCategory::Developer);
        assert_eq!(template.sections.len(), 2);
        assert_eq!(template.sections[1].kind, SectionKind::Projects);
        assert_eq!(template.customization_options.colors, vec!["#000000"]);
    }

    #[test]
    fn into_domain_rejects_unknown_category() {
        let mut model = template_model(Uuid::new_v4(), "dev-folio");
        model.category = "astrology".to_string();

        assert!(matches!(
            model.into_domain(),
            Err(TemplateRepositoryError::SerializationError(_))
        ));
    }
}
