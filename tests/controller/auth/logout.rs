use axum::{http::StatusCode, response::IntoResponse};
use varsity::server::{controller::auth::logout, model::session::user::SessionUserId};
use varsity_test_utils::prelude::*;

#[tokio::test]
/// Expect 307 temporary redirect after logout with a user ID in session
async fn returns_redirect_on_logout_with_user_id() -> Result<(), TestError> {
    let test = test_setup!()?;

    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    // Ensure user was cleared from session
    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect after logout even without session data
///
/// The endpoint only clears the session when a user ID is actually present,
/// avoiding the error that occurs when clearing a session with no data.
async fn returns_redirect_on_logout_with_no_session() -> Result<(), TestError> {
    let test = test_setup!()?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
