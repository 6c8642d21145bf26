use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::character::Role;
use varsity::server::{
    controller::character::get_character_profile,
    model::{app::AppState, session::user::SessionUserId},
};
use varsity_test_utils::prelude::*;

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
/// Expect 404 for an unknown character ID
async fn returns_not_found_for_unknown_character() -> Result<(), TestError> {
    let test = test_setup!()?;
    let state: AppState = test.to_app_state();

    let result = get_character_profile(State(state), test.session.clone(), Path(99)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect a corrupt stored gallery to render as an empty list, not an error
async fn renders_with_corrupt_gallery() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let character = test
        .character()
        .insert_character_with_gallery("Jax", user.id, "{definitely not json")
        .await?;
    let state: AppState = test.to_app_state();

    let result =
        get_character_profile(State(state), test.session.clone(), Path(character.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["gallery"].as_array().unwrap().len(), 0);

    Ok(())
}

#[tokio::test]
/// Expect a stored gallery to round-trip with entries in insertion order
async fn reproduces_stored_gallery_in_order() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let stored = r#"[{"url":"https://img/1.png","caption":"one"},{"url":"https://img/2.png","caption":null},{"url":"https://img/3.png","caption":"three"}]"#;
    let character = test
        .character()
        .insert_character_with_gallery("Jax", user.id, stored)
        .await?;
    let state: AppState = test.to_app_state();

    let resp = get_character_profile(State(state), test.session.clone(), Path(character.id))
        .await
        .unwrap()
        .into_response();

    let body = body_json(resp).await;
    let gallery = body["gallery"].as_array().unwrap();
    assert_eq!(gallery.len(), 3);
    assert_eq!(gallery[0]["url"], "https://img/1.png");
    assert_eq!(gallery[0]["caption"], "one");
    assert_eq!(gallery[1]["url"], "https://img/2.png");
    assert_eq!(gallery[2]["caption"], "three");

    Ok(())
}

#[tokio::test]
/// Expect is_owner to reflect whether the session user created the character
async fn computes_is_owner_from_session() -> Result<(), TestError> {
    let test = test_setup!()?;
    let creator = test.user().insert_user("keeper").await?;
    let other = test.user().insert_user("visitor").await?;
    let character = test
        .character()
        .insert_character("Jax", Role::Player, None, creator.id)
        .await?;
    let state: AppState = test.to_app_state();

    SessionUserId::insert(&test.session, creator.id).await.unwrap();
    let resp = get_character_profile(
        State(state.clone()),
        test.session.clone(),
        Path(character.id),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(body_json(resp).await["is_owner"], true);

    SessionUserId::insert(&test.session, other.id).await.unwrap();
    let resp = get_character_profile(State(state), test.session.clone(), Path(character.id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(body_json(resp).await["is_owner"], false);

    Ok(())
}

#[tokio::test]
/// Expect the candidate list to contain every character except the current one
async fn lists_other_characters_for_connections() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let jax = test
        .character()
        .insert_character("Jax", Role::Player, None, user.id)
        .await?;
    test.character()
        .insert_character("Mara", Role::Civilian, None, user.id)
        .await?;
    let state: AppState = test.to_app_state();

    let resp = get_character_profile(State(state), test.session.clone(), Path(jax.id))
        .await
        .unwrap()
        .into_response();

    let body = body_json(resp).await;
    let others = body["all_characters"].as_array().unwrap();
    assert_eq!(others.len(), 1);
    assert_eq!(others[0]["name"], "Mara");

    Ok(())
}
