use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::DashboardDto,
        character::CharacterRefDto,
    },
    server::{
        controller::util::get_user::get_user_from_session,
        data::character::CharacterRepository,
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Authenticated landing page: the session user and the characters they created
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard view", body = DashboardDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let characters: Vec<CharacterRefDto> = CharacterRepository::new(&state.db)
        .list_by_creator(user.id)
        .await?
        .into_iter()
        .map(|c| CharacterRefDto {
            id: c.id,
            name: c.name,
        })
        .collect();

    let flash = SessionFlash::take(&session).await?;

    Ok(Json(DashboardDto {
        user,
        characters,
        flash: flash.into(),
    }))
}
