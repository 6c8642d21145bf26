use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::character::CharacterCardDto;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ConnectionSongDto {
    pub id: i32,
    pub title: Option<String>,
    pub spotify_url: String,
}

impl From<entity::connection_song::Model> for ConnectionSongDto {
    fn from(song: entity::connection_song::Model) -> Self {
        Self {
            id: song.id,
            title: song.title,
            spotify_url: song.spotify_url,
        }
    }
}

/// View model for a connection page: both endpoints plus attached songs
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ConnectionViewDto {
    pub id: i32,
    pub relationship: String,
    pub details: Option<String>,
    pub character: Option<CharacterCardDto>,
    pub connected_character: Option<CharacterCardDto>,
    pub songs: Vec<ConnectionSongDto>,
}
