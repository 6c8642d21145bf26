//! Session gate middleware.
//!
//! `require_auth` guards routes that need a logged-in user; `require_anonymous`
//! keeps logged-in users away from the entry forms. Both only consult the
//! session; controllers re-resolve the user against the database where the
//! record itself is needed.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::server::model::session::{flash::SessionFlash, user::SessionUserId};

/// Passes the request through when a session-bound user exists, otherwise
/// redirects to the login form with a flash message.
pub async fn require_auth(session: Session, request: Request, next: Next) -> Response {
    match SessionUserId::get(&session).await {
        Ok(Some(_)) => next.run(request).await,
        Ok(None) => {
            if let Err(e) =
                SessionFlash::push_error(&session, "Please log in to view that resource").await
            {
                tracing::warn!("Failed to store login flash message: {}", e);
            }

            Redirect::to("/auth/login").into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Redirects authenticated users to the dashboard, letting anonymous requests
/// through to the entry forms.
pub async fn require_anonymous(session: Session, request: Request, next: Next) -> Response {
    match SessionUserId::get(&session).await {
        Ok(Some(_)) => Redirect::to("/dashboard").into_response(),
        Ok(None) => next.run(request).await,
        Err(e) => e.into_response(),
    }
}
