use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::{
    document_columns, repository_err, Column, Entity,
};
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError, StatCounter,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn insert(&self, portfolio: Portfolio) -> Result<Portfolio, PortfolioRepositoryError> {
        let mut model = document_columns(&portfolio)?;
        model.views = Set(portfolio.stats.views);
        model.unique_visitors = Set(portfolio.stats.unique_visitors);
        model.last_viewed = Set(portfolio.stats.last_viewed.map(|t| t.fixed_offset()));
        model.shares = Set(portfolio.stats.shares);
        model.contact_forms = Set(portfolio.stats.contact_forms);
        model.created_at = Set(portfolio.created_at.fixed_offset());
        model.updated_at = Set(portfolio.updated_at.fixed_offset());

        let inserted = model.insert(&*self.db).await.map_err(map_write_err)?;

        inserted.into_domain().map_err(repository_err)
    }

    async fn save(&self, portfolio: Portfolio) -> Result<Portfolio, PortfolioRepositoryError> {
        let mut model = document_columns(&portfolio)?;
        model.id = NotSet;
        model.user_id = NotSet;
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(portfolio.id))
            .filter(Column::UserId.eq(portfolio.owner.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?;

        results
            .into_iter()
            .next()
            .ok_or(PortfolioRepositoryError::NotFound)?
            .into_domain()
            .map_err(repository_err)
    }

    async fn delete(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<(), PortfolioRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(portfolio_id))
            .filter(Column::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn unpublish_others(
        &self,
        owner: UserId,
        keep: Uuid,
    ) -> Result<u64, PortfolioRepositoryError> {
        let res = Entity::update_many()
            .col_expr(Column::IsPublished, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::UserId.eq(owner.value()))
            .filter(Column::Id.ne(keep))
            .filter(Column::IsPublished.eq(true))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(res.rows_affected)
    }

    async fn increment(
        &self,
        portfolio_id: Uuid,
        counter: StatCounter,
    ) -> Result<(), PortfolioRepositoryError> {
        let column = match counter {
            StatCounter::Views => Column::Views,
            StatCounter::UniqueVisitors => Column::UniqueVisitors,
            StatCounter::Shares => Column::Shares,
            StatCounter::ContactForms => Column::ContactForms,
        };

        let mut update = Entity::update_many().col_expr(column, Expr::col(column).add(1));
        if counter == StatCounter::Views {
            update = update.col_expr(Column::LastViewed, Expr::value(Utc::now().fixed_offset()));
        }

        let res = update
            .filter(Column::Id.eq(portfolio_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_write_err(e: DbErr) -> PortfolioRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        PortfolioRepositoryError::SlugTaken
    } else {
        PortfolioRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
    PortfolioRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::test_fixtures::portfolio_model;
    use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::Model;

    fn repo(db: MockDatabase) -> PortfolioRepositoryPostgres {
        PortfolioRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    fn exec(rows_affected: u64) -> MockDatabase {
        MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }])
    }

    fn sample() -> Portfolio {
        portfolio_model(Uuid::new_v4(), Uuid::new_v4(), "my-work")
            .into_domain()
            .unwrap()
    }

    // ========================================================================
    // insert / save
    // ========================================================================

    #[tokio::test]
    async fn test_insert_returns_stored_row() {
        let portfolio = sample();
        let row = portfolio_model(portfolio.id, portfolio.owner.value(), "my-work");
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row]]);

        let stored = repo(db).insert(portfolio.clone()).await.unwrap();

        assert_eq!(stored.id, portfolio.id);
        assert_eq!(stored.slug, "my-work");
    }

    #[tokio::test]
    async fn test_insert_maps_slug_index_violation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors([DbErr::Custom(
            "duplicate key value violates unique constraint \"idx_portfolios_user_slug\""
                .to_string(),
        )]);

        let result = repo(db).insert(sample()).await;

        assert_eq!(result, Err(PortfolioRepositoryError::SlugTaken));
    }

    #[tokio::test]
    async fn test_insert_other_failures_are_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors([DbErr::Custom(
            "insert or update on table \"portfolios\" violates foreign key constraint".to_string(),
        )]);

        let result = repo(db).insert(sample()).await;

        assert!(matches!(result, Err(PortfolioRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_save_returns_updated_row() {
        let portfolio = sample();
        let mut row = portfolio_model(portfolio.id, portfolio.owner.value(), "renamed");
        row.title = "Renamed".to_string();
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row]]);

        let saved = repo(db).save(portfolio).await.unwrap();

        assert_eq!(saved.title, "Renamed");
        assert_eq!(saved.slug, "renamed");
    }

    #[tokio::test]
    async fn test_save_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()]);

        let result = repo(db).save(sample()).await;

        assert_eq!(result, Err(PortfolioRepositoryError::NotFound));
    }

    // ========================================================================
    // delete / unpublish_others / increment
    // ========================================================================

    #[tokio::test]
    async fn test_delete_success_and_not_found() {
        let owner = UserId::from(Uuid::new_v4());

        assert!(repo(exec(1)).delete(owner, Uuid::new_v4()).await.is_ok());
        assert_eq!(
            repo(exec(0)).delete(owner, Uuid::new_v4()).await,
            Err(PortfolioRepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_unpublish_others_reports_rows_touched() {
        let touched = repo(exec(2))
            .unpublish_others(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(touched, 2);
    }

    #[tokio::test]
    async fn test_increment_views_touches_one_row() {
        let result = repo(exec(1))
            .increment(Uuid::new_v4(), StatCounter::Views)
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_increment_missing_portfolio_is_not_found() {
        let result = repo(exec(0))
            .increment(Uuid::new_v4(), StatCounter::Shares)
            .await;

        assert_eq!(result, Err(PortfolioRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_increment_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection reset".to_string())]);

        let result = repo(db)
            .increment(Uuid::new_v4(), StatCounter::ContactForms)
            .await;

        assert!(matches!(result, Err(PortfolioRepositoryError::DatabaseError(_))));
    }
}
