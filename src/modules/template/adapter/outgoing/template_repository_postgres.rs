use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::template::adapter::outgoing::sea_orm_entity::templates::{
    to_json, ActiveModel, Column, Entity,
};
use crate::modules::template::application::domain::entities::Template;
use crate::modules::template::application::ports::outgoing::{
    CreateTemplateData, PatchTemplateData, TemplateRepository, TemplateRepositoryError,
};
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TemplateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TemplateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TemplateRepository for TemplateRepositoryPostgres {
    async fn create_template(
        &self,
        data: CreateTemplateData,
    ) -> Result<Template, TemplateRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            category: Set(data.category.as_str().to_string()),
            is_premium: Set(data.is_premium),
            price: Set(data.price),
            is_active: Set(data.is_active),
            preview_image: Set(data.preview_image),
            sections: Set(to_json(&data.sections)?),
            customization_options: Set(to_json(&data.customization_options)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_write_err)?;

        result.into_domain()
    }

    async fn patch_template(
        &self,
        template_id: Uuid,
        data: PatchTemplateData,
    ) -> Result<Template, TemplateRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name);
        }
        if let PatchField::Value(slug) = data.slug {
            model.slug = Set(slug);
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(category) = data.category {
            model.category = Set(category.as_str().to_string());
        }
        if let PatchField::Value(is_premium) = data.is_premium {
            model.is_premium = Set(is_premium);
        }
        if let PatchField::Value(price) = data.price {
            model.price = Set(price);
        }
        if let PatchField::Value(is_active) = data.is_active {
            model.is_active = Set(is_active);
        }
        match data.preview_image {
            PatchField::Unset => {}
            PatchField::Null => model.preview_image = Set(None),
            PatchField::Value(url) => model.preview_image = Set(Some(url)),
        }
        if let PatchField::Value(sections) = data.sections {
            model.sections = Set(to_json(&sections)?);
        }
        if let PatchField::Value(options) = data.customization_options {
            model.customization_options = Set(to_json(&options)?);
        }

        let has_changes = model.name.is_set()
            || model.slug.is_set()
            || model.description.is_set()
            || model.category.is_set()
            || model.is_premium.is_set()
            || model.price.is_set()
            || model.is_active.is_set()
            || model.preview_image.is_set()
            || model.sections.is_set()
            || model.customization_options.is_set();

        if !has_changes {
            let existing = Entity::find_by_id(template_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(TemplateRepositoryError::NotFound)?;

            return existing.into_domain();
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(template_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?;

        results
            .into_iter()
            .next()
            .ok_or(TemplateRepositoryError::NotFound)?
            .into_domain()
    }

    async fn delete_template(&self, template_id: Uuid) -> Result<(), TemplateRepositoryError> {
        let result = Entity::delete_by_id(template_id)
            .exec(&*self.db)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(TemplateRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_write_err(e: DbErr) -> TemplateRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        TemplateRepositoryError::SlugAlreadyExists
    } else if msg.contains("foreign key") || msg.contains("23503") {
        TemplateRepositoryError::InUse
    } else {
        TemplateRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> TemplateRepositoryError {
    TemplateRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
