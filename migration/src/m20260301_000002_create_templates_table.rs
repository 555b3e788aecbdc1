use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Templates::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Templates::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Templates::Name).text().not_null())
                    .col(ColumnDef::new(Templates::Slug).text().not_null().unique_key())
                    .col(ColumnDef::new(Templates::Description).text().not_null())
                    .col(ColumnDef::new(Templates::Category).text().not_null())
                    .col(
                        ColumnDef::new(Templates::IsPremium)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Templates::Price)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Templates::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Templates::PreviewImage).text().null())
                    .col(
                        ColumnDef::new(Templates::Sections)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Templates::CustomizationOptions)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Templates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Templates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(Templates::Price).gte(0))
                    .to_owned(),
            )
            .await?;

        // Catalog listing: active templates by category, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_templates_active_category")
                    .table(Templates::Table)
                    .col(Templates::IsActive)
                    .col(Templates::Category)
                    .col(Templates::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_templates_updated_at
                BEFORE UPDATE ON templates
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Templates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Templates {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Category,
    IsPremium,
    Price,
    IsActive,
    PreviewImage,
    Sections,
    CustomizationOptions,
    CreatedAt,
    UpdatedAt,
}
