use sea_orm_migration::prelude::*;

use super::m20250304_105428_create_users_table::Users;

/// Profile data used to auto-fill new portfolios, plus the account plan.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProfiles::ProfessionalTitle).text().null())
                    .col(ColumnDef::new(UserProfiles::Bio).text().null())
                    .col(json_array(UserProfiles::Skills))
                    .col(json_array(UserProfiles::Experience))
                    .col(json_array(UserProfiles::Education))
                    .col(json_array(UserProfiles::Certifications))
                    .col(ColumnDef::new(UserProfiles::Phone).text().null())
                    .col(ColumnDef::new(UserProfiles::Location).text().null())
                    .col(ColumnDef::new(UserProfiles::Website).text().null())
                    .col(
                        ColumnDef::new(UserProfiles::SocialLinks)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(ColumnDef::new(UserProfiles::ProfilePicture).text().null())
                    .col(
                        ColumnDef::new(UserProfiles::Plan)
                            .text()
                            .not_null()
                            .default("free"),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profiles_user")
                            .from(UserProfiles::Table, UserProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_user_profiles_updated_at
                BEFORE UPDATE ON user_profiles
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}

fn json_array(col: UserProfiles) -> ColumnDef {
    ColumnDef::new(col)
        .json_binary()
        .not_null()
        .default(Expr::cust("'[]'::jsonb"))
        .to_owned()
}

#[derive(DeriveIden)]
enum UserProfiles {
    Table,
    UserId,
    ProfessionalTitle,
    Bio,
    Skills,
    Experience,
    Education,
    Certifications,
    Phone,
    Location,
    Website,
    SocialLinks,
    ProfilePicture,
    Plan,
    UpdatedAt,
}
