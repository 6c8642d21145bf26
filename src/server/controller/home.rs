use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, team::HomeDto},
    server::{error::Error, model::app::AppState, service::team::TeamService},
};

pub static HOME_TAG: &str = "home";

/// Home page listing the active teams
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Home view", body = HomeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let teams = TeamService::new(&state.db, &state.notifier)
        .get_active_teams()
        .await?;

    Ok(Json(HomeDto {
        teams: teams.into_iter().map(Into::into).collect(),
    }))
}
