use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251102_000004_connection::Connection;

static IDX_SONG_CONNECTION_ID: &str = "idx-connection_songs-connection_id";
static FK_SONG_CONNECTION_ID: &str = "fk-connection_songs-connection_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConnectionSong::Table)
                    .if_not_exists()
                    .col(pk_auto(ConnectionSong::Id))
                    .col(integer(ConnectionSong::ConnectionId))
                    .col(string_len_null(ConnectionSong::Title, 255))
                    .col(string_len(ConnectionSong::SpotifyUrl, 255))
                    .col(timestamp(ConnectionSong::CreatedAt))
                    .col(timestamp(ConnectionSong::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SONG_CONNECTION_ID)
                    .table(ConnectionSong::Table)
                    .col(ConnectionSong::ConnectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SONG_CONNECTION_ID)
                    .from_tbl(ConnectionSong::Table)
                    .from_col(ConnectionSong::ConnectionId)
                    .to_tbl(Connection::Table)
                    .to_col(Connection::Id)
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
                    .name(FK_SONG_CONNECTION_ID)
                    .table(ConnectionSong::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SONG_CONNECTION_ID)
                    .table(ConnectionSong::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ConnectionSong::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ConnectionSong {
    Table,
    Id,
    ConnectionId,
    Title,
    SpotifyUrl,
    CreatedAt,
    UpdatedAt,
}
