//! HTTP routing and OpenAPI documentation configuration.
//!
//! All endpoints are registered here with their OpenAPI specifications through
//! utoipa-axum, grouped by session gate: public routes, routes requiring an
//! authenticated session, and entry forms requiring an anonymous session.
//! Swagger UI serves the combined document at `/docs`.

use axum::{middleware::from_fn, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller,
    middleware::auth::{require_anonymous, require_auth},
    model::app::AppState,
};

/// Builds the application's HTTP router with all endpoints and Swagger UI
/// documentation.
///
/// # Returns
/// An Axum `Router<AppState>` with the session gates applied per route group,
/// ready to be given state and a session layer.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Varsity", description = "Varsity API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication routes"),
        (name = controller::team::TEAM_TAG, description = "Team management routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character routes"),
        (name = controller::connection::CONNECTION_TAG, description = "Connection routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard routes"),
        (name = controller::home::HOME_TAG, description = "Home routes"),
    ))]
    struct ApiDoc;

    let (public, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::home::index))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::character::list_characters))
        .routes(routes!(controller::character::get_character_profile))
        .routes(routes!(
            controller::character::edit_character_form,
            controller::character::update_character
        ))
        .routes(routes!(controller::character::add_gallery_image))
        .routes(routes!(controller::character::add_connection))
        .routes(routes!(controller::connection::get_connection))
        .routes(routes!(controller::connection::add_song))
        .routes(routes!(controller::team::list_teams))
        .routes(routes!(
            controller::team::create_team_form,
            controller::team::create_team
        ))
        .routes(routes!(controller::team::get_team))
        .routes(routes!(
            controller::team::edit_team_form,
            controller::team::update_team
        ))
        .routes(routes!(controller::team::delete_team))
        .routes(routes!(controller::team::get_team_roster))
        .routes(routes!(controller::team::get_team_members))
        .split_for_parts();

    let (authenticated, authenticated_api) = OpenApiRouter::new()
        .routes(routes!(controller::dashboard::dashboard))
        .routes(routes!(
            controller::character::create_character_form,
            controller::character::create_character
        ))
        .routes(routes!(
            controller::auth::profile,
            controller::auth::update_profile
        ))
        .routes(routes!(controller::auth::change_password))
        .split_for_parts();

    let (anonymous, anonymous_api) = OpenApiRouter::new()
        .routes(routes!(
            controller::auth::login_form,
            controller::auth::login
        ))
        .routes(routes!(
            controller::auth::register_form,
            controller::auth::register
        ))
        .split_for_parts();

    api.merge(authenticated_api);
    api.merge(anonymous_api);

    let routes = public
        .merge(authenticated.route_layer(from_fn(require_auth)))
        .merge(anonymous.route_layer(from_fn(require_anonymous)));

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
