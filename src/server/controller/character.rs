use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use chrono::NaiveDate;
use entity::character::Role;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        character::{
            CharacterCreateViewDto, CharacterEditViewDto, CharacterListItemDto,
            CharacterProfileDto, CharacterRefDto, CharacterUpdate, ConnectionItemDto, CreatorDto,
            GalleryImage, NewCharacter,
        },
        team::TeamRefDto,
    },
    server::{
        controller::{bool_field, int_field, non_empty, text_field, util::get_user::get_user_from_session},
        data::{
            character::CharacterRepository, connection::ConnectionRepository,
            team::TeamRepository, user::UserRepository,
        },
        error::{character::CharacterError, Error},
        model::{app::AppState, gallery, session::user::SessionUserId},
    },
};

pub static CHARACTER_TAG: &str = "character";

#[derive(Deserialize, ToSchema)]
pub struct CharacterCreateForm {
    pub name: String,
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
    pub team_id: Option<String>,
    pub role: String,
    pub position: Option<String>,
    pub jersey_number: Option<String>,
    pub bio: Option<String>,
}

/// Flat edit form; every field is optional and empty strings clear the stored
/// value. Numbers and dates arrive as strings from the form encoding.
#[derive(Deserialize, ToSchema)]
pub struct CharacterEditForm {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub age: Option<String>,
    pub birthday: Option<String>,
    pub zodiac: Option<String>,
    pub hometown: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub sexuality: Option<String>,
    pub pronouns: Option<String>,
    pub languages: Option<String>,
    pub religion: Option<String>,
    pub gender: Option<String>,
    pub url: Option<String>,
    pub role: Option<String>,
    pub position: Option<String>,
    pub jersey_number: Option<String>,
    pub team_id: Option<String>,
    pub job: Option<String>,
    pub bio: Option<String>,
    pub faceclaim: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub sidebar_url: Option<String>,
    pub spotify_embed: Option<String>,
    pub quote: Option<String>,
    pub personality: Option<String>,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    pub likes: Option<String>,
    pub dislikes: Option<String>,
    pub fears: Option<String>,
    pub goals: Option<String>,
    pub appearance: Option<String>,
    pub background: Option<String>,
    pub skills: Option<String>,
    pub fav_food: Option<String>,
    pub fav_music: Option<String>,
    pub fav_movies: Option<String>,
    pub fav_color: Option<String>,
    pub fav_sports: Option<String>,
    pub inspiration: Option<String>,
    pub full_bio: Option<String>,
    pub is_private: Option<String>,
    pub is_archived: Option<String>,
    /// Comma-separated URL list; replaces the stored gallery wholesale
    pub gallery: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct GalleryForm {
    pub img_url: Option<String>,
    pub img_caption: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ConnectionForm {
    pub connected_character_id: i32,
    pub relationship: String,
    pub details: Option<String>,
}

/// Character directory: every character with team name and creator username
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Character directory", body = Vec<CharacterListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let characters = character_repo.list_with_teams().await?;
    let models: Vec<_> = characters.iter().map(|(c, _)| c.clone()).collect();
    let usernames = character_repo.creator_usernames(&models).await?;

    let items: Vec<CharacterListItemDto> = characters
        .into_iter()
        .map(|(character, team)| CharacterListItemDto {
            id: character.id,
            name: character.name,
            avatar_url: character.avatar_url,
            role: character.role.to_string(),
            team: team.map(|t| TeamRefDto {
                id: t.id,
                name: t.name,
            }),
            creator_username: usernames.get(&character.created_by).cloned(),
        })
        .collect();

    Ok(Json(items))
}

/// Character create form view with the team list
#[utoipa::path(
    get,
    path = "/characters/create",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Create form view", body = CharacterCreateViewDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character_form(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let teams = TeamRepository::new(&state.db).get_all().await?;

    Ok(Json(CharacterCreateViewDto {
        teams: teams.into_iter().map(Into::into).collect(),
    }))
}

/// Creates a character owned by the session user
///
/// The route is authentication-gated, so `created_by` is always the logged in
/// user. A blank team selection means "no team".
#[utoipa::path(
    post,
    path = "/characters/create",
    tag = CHARACTER_TAG,
    request_body(content = CharacterCreateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Character created, redirect to the directory"),
        (status = 400, description = "Unknown role value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CharacterCreateForm>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let role = form
        .role
        .parse::<Role>()
        .map_err(CharacterError::InvalidRole)?;

    let team_id = non_empty(form.team_id).and_then(|v| v.parse::<i32>().ok());
    let jersey_number = non_empty(form.jersey_number).and_then(|v| v.parse::<i32>().ok());

    CharacterRepository::new(&state.db)
        .create(NewCharacter {
            name: form.name,
            nickname: non_empty(form.nickname),
            avatar_url: non_empty(form.avatar_url),
            team_id,
            role,
            position: non_empty(form.position),
            jersey_number,
            bio: non_empty(form.bio),
            created_by: user.id,
        })
        .await?;

    Ok(Redirect::to("/characters"))
}

/// Character profile: team, creator, connections, gallery, and the candidate
/// list for new connections
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character profile view", body = CharacterProfileDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character_profile(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let Some((character, team)) = character_repo.get_with_team(id).await? else {
        return Err(CharacterError::NotFound(id).into());
    };

    let creator = UserRepository::new(&state.db)
        .get(character.created_by)
        .await?
        .map(|u| CreatorDto {
            id: u.id,
            username: u.username,
        });

    let connections = ConnectionRepository::new(&state.db)
        .list_for_character(id)
        .await?
        .into_iter()
        .map(|(connection, connected)| ConnectionItemDto {
            id: connection.id,
            relationship: connection.relationship,
            details: connection.details,
            connected_character: connected.map(Into::into),
        })
        .collect();

    let all_characters = character_repo
        .list_others(id)
        .await?
        .into_iter()
        .map(|c| CharacterRefDto {
            id: c.id,
            name: c.name,
        })
        .collect();

    // A corrupt stored gallery degrades to an empty list instead of failing
    // the page.
    let gallery = gallery::decode(character.gallery.as_deref());

    let session_user_id = SessionUserId::get(&session).await?;
    let is_owner = session_user_id == Some(character.created_by);

    Ok(Json(CharacterProfileDto {
        team: team.map(|t| TeamRefDto {
            id: t.id,
            name: t.name,
        }),
        creator,
        gallery,
        connections,
        all_characters,
        is_owner,
        character: character.into(),
    }))
}

/// Character edit form view with the team list
#[utoipa::path(
    get,
    path = "/characters/{id}/edit",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Edit form view", body = CharacterEditViewDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_character_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(character) = CharacterRepository::new(&state.db).get(id).await? else {
        return Err(CharacterError::NotFound(id).into());
    };

    let teams = TeamRepository::new(&state.db).get_all().await?;

    Ok(Json(CharacterEditViewDto {
        character: character.into(),
        teams: teams.into_iter().map(Into::into).collect(),
    }))
}

/// Applies a flat edit form to a character
///
/// Empty strings clear nullable fields, an unparseable birthday is silently
/// stored as null, and a submitted gallery URL list replaces the stored gallery
/// wholesale.
#[utoipa::path(
    post,
    path = "/characters/{id}/edit",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    request_body(content = CharacterEditForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Character updated, redirect to the profile"),
        (status = 400, description = "Unknown role value", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<CharacterEditForm>,
) -> Result<impl IntoResponse, Error> {
    let role = match non_empty(form.role) {
        Some(raw) => Some(raw.parse::<Role>().map_err(CharacterError::InvalidRole)?),
        None => None,
    };

    // An invalid birthday value is nulled rather than rejected.
    let birthday = form
        .birthday
        .map(|v| NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok());

    let gallery = match non_empty(form.gallery) {
        Some(raw) => Some(Some(gallery::encode(&gallery::from_url_list(&raw))?)),
        None => None,
    };

    let update = CharacterUpdate {
        name: form.name.filter(|v| !v.is_empty()),
        nickname: text_field(form.nickname),
        age: int_field(form.age),
        birthday,
        zodiac: text_field(form.zodiac),
        hometown: text_field(form.hometown),
        education: text_field(form.education),
        occupation: text_field(form.occupation),
        sexuality: text_field(form.sexuality),
        pronouns: text_field(form.pronouns),
        languages: text_field(form.languages),
        religion: text_field(form.religion),
        gender: text_field(form.gender),
        url: text_field(form.url),
        role,
        position: text_field(form.position),
        jersey_number: int_field(form.jersey_number),
        team_id: int_field(form.team_id),
        job: text_field(form.job),
        bio: text_field(form.bio),
        faceclaim: text_field(form.faceclaim),
        avatar_url: text_field(form.avatar_url),
        banner_url: text_field(form.banner_url),
        sidebar_url: text_field(form.sidebar_url),
        spotify_embed: text_field(form.spotify_embed),
        quote: text_field(form.quote),
        personality: text_field(form.personality),
        strengths: text_field(form.strengths),
        weaknesses: text_field(form.weaknesses),
        likes: text_field(form.likes),
        dislikes: text_field(form.dislikes),
        fears: text_field(form.fears),
        goals: text_field(form.goals),
        appearance: text_field(form.appearance),
        background: text_field(form.background),
        skills: text_field(form.skills),
        fav_food: text_field(form.fav_food),
        fav_music: text_field(form.fav_music),
        fav_movies: text_field(form.fav_movies),
        fav_color: text_field(form.fav_color),
        fav_sports: text_field(form.fav_sports),
        inspiration: text_field(form.inspiration),
        full_bio: text_field(form.full_bio),
        is_private: bool_field(form.is_private),
        is_archived: bool_field(form.is_archived),
        gallery,
    };

    let updated = CharacterRepository::new(&state.db).update(id, update).await?;

    if updated.is_none() {
        return Err(CharacterError::NotFound(id).into());
    }

    Ok(Redirect::to(&format!("/characters/{}", id)))
}

/// Appends one image to the character gallery
///
/// # Responses
/// - 303 (See Other): Image appended, redirect to the profile gallery section
/// - 400 (Bad Request): Missing image URL
/// - 404 (Not Found): Unknown character ID
#[utoipa::path(
    post,
    path = "/characters/{id}/gallery/add",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    request_body(content = GalleryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Image appended"),
        (status = 400, description = "Image URL required", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<GalleryForm>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let Some(character) = character_repo.get(id).await? else {
        return Err(CharacterError::NotFound(id).into());
    };

    let img_url = non_empty(form.img_url).ok_or(CharacterError::MissingImageUrl)?;

    let mut images = gallery::decode(character.gallery.as_deref());
    images.push(GalleryImage {
        url: img_url,
        caption: form.img_caption,
    });

    let text = gallery::encode(&images)?;
    character_repo.set_gallery(character, text).await?;

    Ok(Redirect::to(&format!("/characters/{}#instagram", id)))
}

/// Creates one directed connection from this character to another
///
/// The target character must exist; duplicates and self-references are
/// permitted, and the inverse direction is never created implicitly.
#[utoipa::path(
    post,
    path = "/characters/{id}/connections/add",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Source character ID")),
    request_body(content = ConnectionForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Connection created"),
        (status = 404, description = "Connected character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_connection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ConnectionForm>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    if character_repo.get(form.connected_character_id).await?.is_none() {
        return Err(CharacterError::ConnectionTargetNotFound(form.connected_character_id).into());
    }

    ConnectionRepository::new(&state.db)
        .create(
            id,
            form.connected_character_id,
            &form.relationship,
            non_empty(form.details),
        )
        .await?;

    Ok(Redirect::to(&format!("/characters/{}#connections", id)))
}
