use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::{
    query_err, Column, Entity,
};
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::ports::outgoing::{PortfolioQuery, PortfolioQueryError};

#[derive(Clone)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn find_by_id(&self, portfolio_id: Uuid) -> Result<Option<Portfolio>, PortfolioQueryError> {
        Entity::find_by_id(portfolio_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.into_domain().map_err(query_err))
            .transpose()
    }

    /// Slugs are stored normalized, so lowercasing the input is enough for a
    /// case-insensitive match.
    async fn find_by_owner_and_slug(
        &self,
        owner: UserId,
        slug: &str,
    ) -> Result<Option<Portfolio>, PortfolioQueryError> {
        let normalized_slug = slug.trim().to_lowercase();

        Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .filter(Column::Slug.eq(normalized_slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.into_domain().map_err(query_err))
            .transpose()
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Portfolio>, PortfolioQueryError> {
        Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .order_by_desc(Column::UpdatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|m| m.into_domain().map_err(query_err))
            .collect()
    }
}

fn map_db_err(e: DbErr) -> PortfolioQueryError {
    PortfolioQueryError::DatabaseError(e.to_string())
}
