use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthViewDto, ProfileUpdate, ProfileViewDto, RegisterUser},
    },
    server::{
        controller::{non_empty, util::get_user::get_user_from_session},
        error::{auth::AuthError, Error},
        model::{
            app::AppState,
            session::{flash::SessionFlash, user::SessionUserId},
        },
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ProfileForm {
    pub display_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
}

/// Login form view with any pending flash messages
#[utoipa::path(
    get,
    path = "/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Login form view", body = AuthViewDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_form(session: Session) -> Result<impl IntoResponse, Error> {
    let flash = SessionFlash::take(&session).await?;

    Ok(Json(AuthViewDto {
        flash: flash.into(),
    }))
}

/// Verifies credentials and establishes the session
///
/// # Responses
/// - 303 (See Other): Redirect to the dashboard on success, or back to the
///   login form with a flash message on bad credentials
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Session established or credentials rejected"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    match auth_service.authenticate(&form.username, &form.password).await {
        Ok(user) => {
            SessionUserId::insert(&session, user.id).await?;

            Ok(Redirect::to("/dashboard"))
        }
        Err(Error::AuthError(AuthError::InvalidCredentials)) => {
            SessionFlash::push_error(&session, "Username or password is incorrect").await?;

            Ok(Redirect::to("/auth/login"))
        }
        Err(e) => Err(e),
    }
}

/// Registration form view with any pending flash messages
#[utoipa::path(
    get,
    path = "/auth/register",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Registration form view", body = AuthViewDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_form(session: Session) -> Result<impl IntoResponse, Error> {
    let flash = SessionFlash::take(&session).await?;

    Ok(Json(AuthViewDto {
        flash: flash.into(),
    }))
}

/// Registers a new account and logs the user straight in
///
/// # Responses
/// - 303 (See Other): Redirect to the dashboard on success, or back to the
///   registration form with a flash message on a taken username/email
/// - 500 (Internal Server Error): Database, hashing, or session failure
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Account created or registration conflict"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let result = auth_service
        .register(RegisterUser {
            username: form.username,
            email: form.email,
            password: form.password,
            display_name: form.display_name,
        })
        .await;

    match result {
        Ok(user) => {
            SessionUserId::insert(&session, user.id).await?;
            SessionFlash::push_success(&session, "You are now registered").await?;

            Ok(Redirect::to("/dashboard"))
        }
        Err(Error::AuthError(e @ (AuthError::UsernameTaken | AuthError::EmailTaken))) => {
            SessionFlash::push_error(&session, &e.to_string()).await?;

            Ok(Redirect::to("/auth/register"))
        }
        Err(e) => Err(e),
    }
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to login route
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/auth/login"))
}

/// Profile settings view for the logged in user
#[utoipa::path(
    get,
    path = "/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Profile settings view", body = ProfileViewDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let flash = SessionFlash::take(&session).await?;

    Ok(Json(ProfileViewDto {
        user,
        flash: flash.into(),
    }))
}

/// Applies a partial profile update for the logged in user
#[utoipa::path(
    post,
    path = "/auth/profile",
    tag = AUTH_TAG,
    request_body(content = ProfileForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Profile updated"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProfileForm>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    AuthService::new(&state.db)
        .update_profile(
            user.id,
            ProfileUpdate {
                display_name: non_empty(form.display_name),
                email: non_empty(form.email),
            },
        )
        .await?;

    SessionFlash::push_success(&session, "Profile updated").await?;

    Ok(Redirect::to("/auth/profile"))
}

/// Replaces the password after verifying the current one
///
/// # Responses
/// - 303 (See Other): Redirect back to the profile view; a wrong current
///   password is reported via flash message
/// - 500 (Internal Server Error): Database, hashing, or session failure
#[utoipa::path(
    post,
    path = "/auth/password",
    tag = AUTH_TAG,
    request_body(content = PasswordForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Password changed or current password rejected"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PasswordForm>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let result = AuthService::new(&state.db)
        .change_password(user.id, &form.current_password, &form.new_password)
        .await;

    match result {
        Ok(_) => {
            SessionFlash::push_success(&session, "Password changed").await?;

            Ok(Redirect::to("/auth/profile"))
        }
        Err(Error::AuthError(AuthError::InvalidCredentials)) => {
            SessionFlash::push_error(&session, "Current password is incorrect").await?;

            Ok(Redirect::to("/auth/profile"))
        }
        Err(e) => Err(e),
    }
}
