use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::warn;

use crate::auth::adapter::outgoing::sea_orm_entity::users::Entity as UserEntity;
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::user_profiles::{
    Entity as ProfileEntity, Model as ProfileModel,
};
use crate::modules::portfolio::application::domain::profile::{PlanTier, UserProfile};
use crate::modules::portfolio::application::ports::outgoing::{ProfileSource, ProfileSourceError};

/// Reads the account row plus its optional profile row.
#[derive(Clone)]
pub struct ProfileSourcePostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileSourcePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileSource for ProfileSourcePostgres {
    async fn find_profile(&self, owner: UserId) -> Result<Option<UserProfile>, ProfileSourceError> {
        let Some(user) = UserEntity::find_by_id(owner.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .filter(|u| !u.is_deleted)
        else {
            return Ok(None);
        };

        let details = ProfileEntity::find_by_id(owner.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut profile = UserProfile {
            user_id: owner,
            full_name: user.full_name,
            email: user.email,
            professional_title: None,
            bio: None,
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            phone: None,
            location: None,
            website: None,
            social_links: Map::new(),
            profile_picture: None,
            plan: PlanTier::Free,
        };

        if let Some(details) = details {
            apply_details(&mut profile, details);
        }

        Ok(Some(profile))
    }
}

fn apply_details(profile: &mut UserProfile, details: ProfileModel) {
    let user_id = profile.user_id;
    profile.plan = details.plan.parse().unwrap_or_else(|e| {
        warn!(user_id = %user_id, error = %e, "Unknown plan tier, treating as free");
        PlanTier::Free
    });
    profile.professional_title = details.professional_title;
    profile.bio = details.bio;
    profile.skills = details
        .skills
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    profile.experience = array(details.experience);
    profile.education = array(details.education);
    profile.certifications = array(details.certifications);
    profile.phone = details.phone;
    profile.location = details.location;
    profile.website = details.website;
    profile.social_links = match details.social_links {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    profile.profile_picture = details.profile_picture;
}

fn array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

fn map_db_err(e: DbErr) -> ProfileSourceError {
    ProfileSourceError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;
    use uuid::Uuid;

    fn user(id: Uuid, deleted: bool) -> UserModel {
        UserModel {
            id,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            is_verified: true,
            is_deleted: deleted,
        }
    }

    fn details(id: Uuid) -> ProfileModel {
        ProfileModel {
            user_id: id,
            professional_title: Some("Mathematician".to_string()),
            bio: Some("First programmer".to_string()),
            skills: json!(["Analysis", "Rust", 42]),
            experience: json!([{ "company": "Analytical Engine" }]),
            education: json!([]),
            certifications: json!(null),
            phone: None,
            location: Some("London".to_string()),
            website: None,
            social_links: json!({ "github": "https://github.com/ada" }),
            profile_picture: None,
            plan: "pro".to_string(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    fn source(db: MockDatabase) -> ProfileSourcePostgres {
        ProfileSourcePostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_profile_combines_account_and_details() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(id, false)]])
            .append_query_results([vec![details(id)]]);

        let profile = source(db)
            .find_profile(UserId::from(id))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(profile.full_name, "Ada Lovelace");
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.skills, vec!["Analysis", "Rust"]);
        assert_eq!(profile.experience.len(), 1);
        assert!(profile.certifications.is_empty());
        assert_eq!(profile.social_links["github"], "https://github.com/ada");
        assert!(profile.is_pro());
    }

    #[tokio::test]
    async fn test_missing_details_give_an_empty_free_profile() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(id, false)]])
            .append_query_results([Vec::<ProfileModel>::new()]);

        let profile = source(db)
            .find_profile(UserId::from(id))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(profile.plan, PlanTier::Free);
        assert!(profile.skills.is_empty());
        assert!(profile.bio.is_none());
    }

    #[tokio::test]
    async fn test_deleted_account_has_no_profile() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(id, true)]]);

        assert_eq!(source(db).find_profile(UserId::from(id)).await, Ok(None));
    }

    #[tokio::test]
    async fn test_unknown_account_has_no_profile() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<UserModel>::new()]);

        assert_eq!(
            source(db).find_profile(UserId::from(Uuid::new_v4())).await,
            Ok(None)
        );
    }
}
