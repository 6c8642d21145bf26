use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string_len_uniq(Team::Name, 100))
                    .col(text_null(Team::Description))
                    .col(string_len_null(Team::City, 100))
                    .col(string_len_null(Team::Mascot, 100))
                    .col(string_len_null(Team::LogoUrl, 255))
                    .col(string_len_null(Team::PrimaryColor, 7))
                    .col(string_len_null(Team::SecondaryColor, 7))
                    .col(string_len_null(Team::AccentColor, 7))
                    .col(boolean(Team::IsActive).default(true))
                    .col(timestamp(Team::CreatedAt))
                    .col(timestamp(Team::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Name,
    Description,
    City,
    Mascot,
    LogoUrl,
    PrimaryColor,
    SecondaryColor,
    AccentColor,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
