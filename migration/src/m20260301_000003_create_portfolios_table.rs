use sea_orm_migration::prelude::*;

use super::m20250304_105428_create_users_table::Users;
use super::m20260301_000002_create_templates_table::Templates;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Portfolios::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Portfolios::UserId).uuid().not_null())
                    .col(ColumnDef::new(Portfolios::TemplateId).uuid().not_null())
                    .col(ColumnDef::new(Portfolios::Title).text().not_null())
                    .col(ColumnDef::new(Portfolios::Slug).text().not_null())
                    .col(jsonb(Portfolios::ActiveSections, "'[]'::jsonb"))
                    .col(jsonb(Portfolios::CustomData, "'{}'::jsonb"))
                    .col(jsonb(Portfolios::CustomStyling, "'{}'::jsonb"))
                    .col(jsonb(Portfolios::SeoSettings, "'{}'::jsonb"))
                    .col(ColumnDef::new(Portfolios::CustomDomain).text().null())
                    .col(ColumnDef::new(Portfolios::ViewPasswordHash).text().null())
                    .col(
                        ColumnDef::new(Portfolios::AnalyticsEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(counter(Portfolios::Views))
                    .col(counter(Portfolios::UniqueVisitors))
                    .col(
                        ColumnDef::new(Portfolios::LastViewed)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(counter(Portfolios::Shares))
                    .col(counter(Portfolios::ContactForms))
                    .col(
                        ColumnDef::new(Portfolios::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Portfolios::IsDraft)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Portfolios::PublishedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Portfolios::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolios_user")
                            .from(Portfolios::Table, Portfolios::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolios_template")
                            .from(Portfolios::Table, Portfolios::TemplateId)
                            .to(Templates::Table, Templates::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        let db = manager.get_connection();

        // Slugs are unique per owner, case-insensitively
        db.execute_unprepared(
            r#"
            CREATE UNIQUE INDEX idx_portfolios_user_slug
            ON portfolios (user_id, lower(slug));
            "#,
        )
        .await?;

        // Dashboard listing: newest first per owner
        db.execute_unprepared(
            r#"
            CREATE INDEX idx_portfolios_user_created
            ON portfolios (user_id, created_at DESC);
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            CREATE INDEX idx_portfolios_template
            ON portfolios (template_id);
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            CREATE TRIGGER update_portfolios_updated_at
            BEFORE UPDATE ON portfolios
            FOR EACH ROW
            EXECUTE FUNCTION update_updated_at_column();
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}

fn jsonb(col: Portfolios, default: &str) -> ColumnDef {
    ColumnDef::new(col)
        .json_binary()
        .not_null()
        .default(Expr::cust(default))
        .to_owned()
}

fn counter(col: Portfolios) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .default(0)
        .to_owned()
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    UserId,
    TemplateId,
    Title,
    Slug,
    ActiveSections,
    CustomData,
    CustomStyling,
    SeoSettings,
    CustomDomain,
    ViewPasswordHash,
    AnalyticsEnabled,
    Views,
    UniqueVisitors,
    LastViewed,
    Shares,
    ContactForms,
    IsPublished,
    IsDraft,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
