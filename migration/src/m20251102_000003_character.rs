use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251102_000001_user::User, m20251102_000002_team::Team};

static IDX_CHARACTER_TEAM_ID: &str = "idx-characters-team_id";
static IDX_CHARACTER_CREATED_BY: &str = "idx-characters-created_by";
static FK_CHARACTER_TEAM_ID: &str = "fk-characters-team_id";
static FK_CHARACTER_CREATED_BY: &str = "fk-characters-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len(Character::Name, 100))
                    .col(string_len_null(Character::Nickname, 100))
                    .col(integer_null(Character::Age))
                    .col(date_null(Character::Birthday))
                    .col(string_len_null(Character::Zodiac, 50))
                    .col(string_len_null(Character::Hometown, 100))
                    .col(string_len_null(Character::Education, 100))
                    .col(string_len_null(Character::Occupation, 100))
                    .col(string_len_null(Character::Sexuality, 50))
                    .col(string_len_null(Character::Pronouns, 50))
                    .col(string_len_null(Character::Languages, 100))
                    .col(string_len_null(Character::Religion, 50))
                    .col(string_len_null(Character::Gender, 50))
                    .col(string_len_null(Character::Url, 255))
                    .col(string_len(Character::Role, 20))
                    .col(string_len_null(Character::Position, 50))
                    .col(integer_null(Character::JerseyNumber))
                    .col(integer_null(Character::TeamId))
                    .col(string_len_null(Character::Job, 100))
                    .col(text_null(Character::Bio))
                    .col(string_len_null(Character::Faceclaim, 255))
                    .col(string_len_null(Character::AvatarUrl, 255))
                    .col(string_len_null(Character::BannerUrl, 255))
                    .col(string_len_null(Character::SidebarUrl, 255))
                    .col(text_null(Character::SpotifyEmbed))
                    .col(text_null(Character::Quote))
                    .col(text_null(Character::Personality))
                    .col(text_null(Character::Strengths))
                    .col(text_null(Character::Weaknesses))
                    .col(text_null(Character::Likes))
                    .col(text_null(Character::Dislikes))
                    .col(text_null(Character::Fears))
                    .col(text_null(Character::Goals))
                    .col(text_null(Character::Appearance))
                    .col(text_null(Character::Background))
                    .col(text_null(Character::Skills))
                    .col(string_len_null(Character::FavFood, 100))
                    .col(string_len_null(Character::FavMusic, 100))
                    .col(string_len_null(Character::FavMovies, 100))
                    .col(string_len_null(Character::FavColor, 50))
                    .col(string_len_null(Character::FavSports, 100))
                    .col(text_null(Character::Inspiration))
                    .col(text_null(Character::FullBio))
                    .col(boolean(Character::IsPrivate).default(false))
                    .col(boolean(Character::IsArchived).default(false))
                    .col(text_null(Character::Gallery))
                    .col(integer(Character::CreatedBy))
                    .col(timestamp(Character::CreatedAt))
                    .col(timestamp(Character::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_TEAM_ID)
                    .table(Character::Table)
                    .col(Character::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_CREATED_BY)
                    .table(Character::Table)
                    .col(Character::CreatedBy)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_TEAM_ID)
                    .from_tbl(Character::Table)
                    .from_col(Character::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_CREATED_BY)
                    .from_tbl(Character::Table)
                    .from_col(Character::CreatedBy)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTER_CREATED_BY)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTER_TEAM_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_CREATED_BY)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_TEAM_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Nickname,
    Age,
    Birthday,
    Zodiac,
    Hometown,
    Education,
    Occupation,
    Sexuality,
    Pronouns,
    Languages,
    Religion,
    Gender,
    Url,
    Role,
    Position,
    JerseyNumber,
    TeamId,
    Job,
    Bio,
    Faceclaim,
    AvatarUrl,
    BannerUrl,
    SidebarUrl,
    SpotifyEmbed,
    Quote,
    Personality,
    Strengths,
    Weaknesses,
    Likes,
    Dislikes,
    Fears,
    Goals,
    Appearance,
    Background,
    Skills,
    FavFood,
    FavMusic,
    FavMovies,
    FavColor,
    FavSports,
    Inspiration,
    FullBio,
    IsPrivate,
    IsArchived,
    Gallery,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
