use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use entity::character::Role;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        team::{
            CreateTeam, TeamDetailsDto, TeamFormViewDto, TeamMemberDto, TeamRosterDto,
            TeamSummaryDto, TeamUpdate,
        },
    },
    server::{
        controller::{bool_field, non_empty, text_field},
        error::{team::TeamError, Error},
        model::{app::AppState, session::flash::SessionFlash},
        service::team::TeamService,
    },
};

pub static TEAM_TAG: &str = "team";

#[derive(Deserialize, ToSchema)]
pub struct TeamForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub mascot: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub is_active: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct MembersQuery {
    pub role: Option<String>,
}

/// Team directory with live player and staff counts
#[utoipa::path(
    get,
    path = "/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Team directory with counts", body = Vec<TeamSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_teams(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let teams = TeamService::new(&state.db, &state.notifier)
        .get_all_teams_with_counts()
        .await?;

    Ok(Json(teams))
}

/// Team create form view with any pending flash messages
#[utoipa::path(
    get,
    path = "/teams/create",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Create form view", body = TeamFormViewDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team_form(session: Session) -> Result<impl IntoResponse, Error> {
    let flash = SessionFlash::take(&session).await?;

    Ok(Json(TeamFormViewDto {
        team: None,
        flash: flash.into(),
    }))
}

/// Creates a team
///
/// Validation and conflict failures flash a message and redirect back to the
/// form rather than surfacing an error status.
#[utoipa::path(
    post,
    path = "/teams/create",
    tag = TEAM_TAG,
    request_body(content = TeamForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Team created or validation/conflict reported via flash"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<TeamForm>,
) -> Result<impl IntoResponse, Error> {
    let data = CreateTeam {
        name: form.name.unwrap_or_default(),
        description: non_empty(form.description),
        city: non_empty(form.city),
        mascot: non_empty(form.mascot),
        logo_url: non_empty(form.logo_url),
        primary_color: non_empty(form.primary_color),
        secondary_color: non_empty(form.secondary_color),
        accent_color: non_empty(form.accent_color),
    };

    let result = TeamService::new(&state.db, &state.notifier)
        .create_team(data)
        .await;

    match result {
        Ok(team) => {
            SessionFlash::push_success(&session, &format!("{} has been created", team.name))
                .await?;

            Ok(Redirect::to("/teams"))
        }
        Err(Error::TeamError(e @ (TeamError::MissingName | TeamError::NameTaken(_)))) => {
            SessionFlash::push_error(&session, &e.to_string()).await?;

            Ok(Redirect::to("/teams/create"))
        }
        Err(e) => Err(e),
    }
}

/// Team page: counts plus featured players
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team details view", body = TeamDetailsDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let details = TeamService::new(&state.db, &state.notifier)
        .get_team_with_details(id)
        .await?;

    Ok(Json(details))
}

/// Team edit form view
#[utoipa::path(
    get,
    path = "/teams/{id}/edit",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Edit form view", body = TeamFormViewDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_team_form(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let details = TeamService::new(&state.db, &state.notifier)
        .get_team_with_details(id)
        .await?;
    let flash = SessionFlash::take(&session).await?;

    Ok(Json(TeamFormViewDto {
        team: Some(details.team),
        flash: flash.into(),
    }))
}

/// Applies a partial team update
///
/// An empty submitted name keeps the stored one; name changes re-check
/// uniqueness and conflicts flash back to the edit form.
#[utoipa::path(
    post,
    path = "/teams/{id}/edit",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    request_body(content = TeamForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Team updated or conflict reported via flash"),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<TeamForm>,
) -> Result<impl IntoResponse, Error> {
    let update = TeamUpdate {
        name: non_empty(form.name),
        description: text_field(form.description),
        city: text_field(form.city),
        mascot: text_field(form.mascot),
        logo_url: text_field(form.logo_url),
        primary_color: text_field(form.primary_color),
        secondary_color: text_field(form.secondary_color),
        accent_color: text_field(form.accent_color),
        is_active: bool_field(form.is_active),
    };

    let result = TeamService::new(&state.db, &state.notifier)
        .update_team(id, update)
        .await;

    match result {
        Ok(team) => {
            SessionFlash::push_success(&session, &format!("{} has been updated", team.name))
                .await?;

            Ok(Redirect::to(&format!("/teams/{}", id)))
        }
        Err(Error::TeamError(e @ TeamError::NameTaken(_))) => {
            SessionFlash::push_error(&session, &e.to_string()).await?;

            Ok(Redirect::to(&format!("/teams/{}/edit", id)))
        }
        Err(e) => Err(e),
    }
}

/// Deletes a team unless characters still reference it
///
/// A blocked delete flashes the count-naming message and redirects back to the
/// directory.
#[utoipa::path(
    post,
    path = "/teams/{id}/delete",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 303, description = "Team deleted or blocked delete reported via flash"),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let result = TeamService::new(&state.db, &state.notifier)
        .delete_team(id)
        .await;

    match result {
        Ok(()) => {
            SessionFlash::push_success(&session, "Team deleted").await?;

            Ok(Redirect::to("/teams"))
        }
        Err(Error::TeamError(e @ TeamError::HasCharacters { .. })) => {
            SessionFlash::push_error(&session, &e.to_string()).await?;

            Ok(Redirect::to("/teams"))
        }
        Err(e) => Err(e),
    }
}

/// Full roster view: players and staff, archived excluded
#[utoipa::path(
    get,
    path = "/teams/{id}/roster",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Roster view", body = TeamRosterDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_roster(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let roster = TeamService::new(&state.db, &state.notifier)
        .get_team_roster(id)
        .await?;

    Ok(Json(roster))
}

/// Team members, optionally filtered by role
#[utoipa::path(
    get,
    path = "/teams/{id}/members",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID"),
        ("role" = Option<String>, Query, description = "Role filter: Player, Staff, or Civilian")
    ),
    responses(
        (status = 200, description = "Member list", body = Vec<TeamMemberDto>),
        (status = 400, description = "Unknown role filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_members(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<MembersQuery>,
) -> Result<impl IntoResponse, Error> {
    let role = match non_empty(query.role) {
        Some(raw) => Some(raw.parse::<Role>().map_err(TeamError::InvalidRole)?),
        None => None,
    };

    let members = TeamService::new(&state.db, &state.notifier)
        .get_team_members(id, role)
        .await?;

    Ok(Json(members))
}
