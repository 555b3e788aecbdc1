use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::template::adapter::outgoing::sea_orm_entity::templates::{Column, Entity};
use crate::modules::template::application::domain::entities::Template;
use crate::modules::template::application::ports::outgoing::{
    TemplateListFilter, TemplateQuery, TemplateQueryError, TemplateRepositoryError,
};

#[derive(Clone)]
pub struct TemplateQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TemplateQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TemplateQuery for TemplateQueryPostgres {
    async fn find_by_id(&self, template_id: Uuid) -> Result<Option<Template>, TemplateQueryError> {
        Entity::find_by_id(template_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|model| model.into_domain().map_err(map_conversion_err))
            .transpose()
    }

    async fn list(&self, filter: TemplateListFilter) -> Result<Vec<Template>, TemplateQueryError> {
        let mut query = Entity::find();

        if !filter.include_inactive {
            query = query.filter(Column::IsActive.eq(true));
        }
        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category.as_str()));
        }
        if let Some(is_premium) = filter.is_premium {
            query = query.filter(Column::IsPremium.eq(is_premium));
        }

        query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|model| model.into_domain().map_err(map_conversion_err))
            .collect()
    }
}

fn map_db_err(e: DbErr) -> TemplateQueryError {
    TemplateQueryError::DatabaseError(e.to_string())
}

fn map_conversion_err(e: TemplateRepositoryError) -> TemplateQueryError {
    TemplateQueryError::SerializationError(e.to_string())
}
