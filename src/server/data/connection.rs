use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ConnectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConnectionRepository<'a, C> {
    /// Creates a new instance of [`ConnectionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates one directed connection row; the inverse direction is never implied
    pub async fn create(
        &self,
        character_id: i32,
        connected_character_id: i32,
        relationship: &str,
        details: Option<String>,
    ) -> Result<entity::connection::Model, DbErr> {
        let connection = entity::connection::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            connected_character_id: ActiveValue::Set(connected_character_id),
            relationship: ActiveValue::Set(relationship.to_string()),
            details: ActiveValue::Set(details),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        connection.insert(self.db).await
    }

    pub async fn get(
        &self,
        connection_id: i32,
    ) -> Result<Option<entity::connection::Model>, DbErr> {
        entity::prelude::Connection::find_by_id(connection_id)
            .one(self.db)
            .await
    }

    /// Outgoing connections for a character, each with its target endpoint
    pub async fn list_for_character(
        &self,
        character_id: i32,
    ) -> Result<Vec<(entity::connection::Model, Option<entity::character::Model>)>, DbErr> {
        entity::prelude::Connection::find()
            .filter(entity::connection::Column::CharacterId.eq(character_id))
            .find_also_related(entity::character::Entity)
            .all(self.db)
            .await
    }

    pub async fn songs(
        &self,
        connection_id: i32,
    ) -> Result<Vec<entity::connection_song::Model>, DbErr> {
        entity::prelude::ConnectionSong::find()
            .filter(entity::connection_song::Column::ConnectionId.eq(connection_id))
            .order_by_asc(entity::connection_song::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn add_song(
        &self,
        connection_id: i32,
        title: Option<String>,
        spotify_url: &str,
    ) -> Result<entity::connection_song::Model, DbErr> {
        let song = entity::connection_song::ActiveModel {
            connection_id: ActiveValue::Set(connection_id),
            title: ActiveValue::Set(title),
            spotify_url: ActiveValue::Set(spotify_url.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        song.insert(self.db).await
    }
}
