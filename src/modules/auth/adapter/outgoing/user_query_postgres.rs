use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::auth::application::ports::outgoing::user_query::{
    AccountHandle, UserQuery, UserQueryError,
};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<UserModel> for AccountHandle {
    fn from(model: UserModel) -> Self {
        Self {
            id: model.id,
            username: model.username,
            is_deleted: model.is_deleted,
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountHandle>, UserQueryError> {
        // Live accounts first so a recycled username resolves to its current owner.
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .order_by_asc(UserColumn::IsDeleted)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::Unavailable(e.to_string()))?;

        Ok(user.map(AccountHandle::from))
    }
}
