//! Tests for the dashboard controller.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::character::Role;
use varsity::server::{
    controller::dashboard::dashboard,
    model::{app::AppState, session::user::SessionUserId},
};
use varsity_test_utils::prelude::*;

#[tokio::test]
/// Expect the dashboard to list the session user and their characters
async fn lists_user_and_their_characters() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let other = test.user().insert_user("visitor").await?;
    test.character()
        .insert_character("Jax", Role::Player, None, user.id)
        .await?;
    test.character()
        .insert_character("Mara", Role::Civilian, None, other.id)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let state: AppState = test.to_app_state();

    let result = dashboard(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["user"]["username"], "keeper");
    let characters = body["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0]["name"], "Jax");

    Ok(())
}

#[tokio::test]
/// Expect a stale session (user deleted) to clear the session and return 404
async fn clears_stale_session() -> Result<(), TestError> {
    let test = test_setup!()?;
    SessionUserId::insert(&test.session, 42).await.unwrap();
    let state: AppState = test.to_app_state();

    let result = dashboard(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}
