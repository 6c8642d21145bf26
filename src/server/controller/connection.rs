use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        connection::{ConnectionSongDto, ConnectionViewDto},
    },
    server::{
        controller::non_empty,
        data::{character::CharacterRepository, connection::ConnectionRepository},
        error::{connection::ConnectionError, Error},
        model::app::AppState,
    },
};

pub static CONNECTION_TAG: &str = "connection";

#[derive(Deserialize, ToSchema)]
pub struct SongForm {
    pub title: Option<String>,
    pub spotify_url: Option<String>,
}

/// Connection view: both endpoint characters and the attached songs
#[utoipa::path(
    get,
    path = "/connections/{id}",
    tag = CONNECTION_TAG,
    params(("id" = i32, Path, description = "Connection ID")),
    responses(
        (status = 200, description = "Connection view", body = ConnectionViewDto),
        (status = 404, description = "Connection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_connection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let connection_repo = ConnectionRepository::new(&state.db);

    let Some(connection) = connection_repo.get(id).await? else {
        return Err(ConnectionError::NotFound(id).into());
    };

    let character_repo = CharacterRepository::new(&state.db);
    let character = character_repo.get(connection.character_id).await?;
    let connected_character = character_repo.get(connection.connected_character_id).await?;

    let songs: Vec<ConnectionSongDto> = connection_repo
        .songs(connection.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ConnectionViewDto {
        id: connection.id,
        relationship: connection.relationship,
        details: connection.details,
        character: character.map(Into::into),
        connected_character: connected_character.map(Into::into),
        songs,
    }))
}

/// Attaches a song to a connection; the Spotify URL is required
#[utoipa::path(
    post,
    path = "/connections/{id}/songs/add",
    tag = CONNECTION_TAG,
    params(("id" = i32, Path, description = "Connection ID")),
    request_body(content = SongForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Song added, redirect to the connection"),
        (status = 400, description = "Spotify URL required", body = ErrorDto),
        (status = 404, description = "Connection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_song(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<SongForm>,
) -> Result<impl IntoResponse, Error> {
    let connection_repo = ConnectionRepository::new(&state.db);

    if connection_repo.get(id).await?.is_none() {
        return Err(ConnectionError::NotFound(id).into());
    }

    let spotify_url = non_empty(form.spotify_url).ok_or(ConnectionError::MissingSpotifyUrl)?;

    connection_repo
        .add_song(id, non_empty(form.title), &spotify_url)
        .await?;

    Ok(Redirect::to(&format!("/connections/{}", id)))
}
