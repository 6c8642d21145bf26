use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251102_000003_character::Character;

static IDX_CONNECTION_CHARACTER_ID: &str = "idx-connections-character_id";
static FK_CONNECTION_CHARACTER_ID: &str = "fk-connections-character_id";
static FK_CONNECTION_CONNECTED_CHARACTER_ID: &str = "fk-connections-connected_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Connection::Table)
                    .if_not_exists()
                    .col(pk_auto(Connection::Id))
                    .col(integer(Connection::CharacterId))
                    .col(integer(Connection::ConnectedCharacterId))
                    .col(string_len(Connection::Relationship, 100))
                    .col(text_null(Connection::Details))
                    .col(timestamp(Connection::CreatedAt))
                    .col(timestamp(Connection::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONNECTION_CHARACTER_ID)
                    .table(Connection::Table)
                    .col(Connection::CharacterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONNECTION_CHARACTER_ID)
                    .from_tbl(Connection::Table)
                    .from_col(Connection::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONNECTION_CONNECTED_CHARACTER_ID)
                    .from_tbl(Connection::Table)
                    .from_col(Connection::ConnectedCharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONNECTION_CONNECTED_CHARACTER_ID)
                    .table(Connection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONNECTION_CHARACTER_ID)
                    .table(Connection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONNECTION_CHARACTER_ID)
                    .table(Connection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Connection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Connection {
    Table,
    Id,
    CharacterId,
    ConnectedCharacterId,
    Relationship,
    Details,
    CreatedAt,
    UpdatedAt,
}
