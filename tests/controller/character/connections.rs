use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use entity::character::Role;
use varsity::server::{
    controller::character::{add_connection, ConnectionForm},
    data::connection::ConnectionRepository,
    model::app::AppState,
};
use varsity_test_utils::prelude::*;

#[tokio::test]
/// Expect a connection from A to B to be directed: no inverse row appears
async fn creates_directed_connection_only() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let a = test
        .character()
        .insert_character("Jax", Role::Player, None, user.id)
        .await?;
    let b = test
        .character()
        .insert_character("Mara", Role::Civilian, None, user.id)
        .await?;
    let state: AppState = test.to_app_state();

    let result = add_connection(
        State(state),
        Path(a.id),
        Form(ConnectionForm {
            connected_character_id: b.id,
            relationship: "rivals".to_string(),
            details: Some("old league feud".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(axum::http::header::LOCATION).unwrap(),
        &format!("/characters/{}#connections", a.id)
    );

    let connection_repo = ConnectionRepository::new(&test.db);
    assert_eq!(connection_repo.list_for_character(a.id).await?.len(), 1);
    assert!(connection_repo.list_for_character(b.id).await?.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect duplicate connections in the same direction to be permitted
async fn permits_duplicate_connections() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let a = test
        .character()
        .insert_character("Jax", Role::Player, None, user.id)
        .await?;
    let b = test
        .character()
        .insert_character("Mara", Role::Civilian, None, user.id)
        .await?;
    let state: AppState = test.to_app_state();

    for relationship in ["rivals", "teammates"] {
        add_connection(
            State(state.clone()),
            Path(a.id),
            Form(ConnectionForm {
                connected_character_id: b.id,
                relationship: relationship.to_string(),
                details: None,
            }),
        )
        .await
        .unwrap();
    }

    let connection_repo = ConnectionRepository::new(&test.db);
    assert_eq!(connection_repo.list_for_character(a.id).await?.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect 404 when the connected character does not exist
async fn fails_for_unknown_target() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let a = test
        .character()
        .insert_character("Jax", Role::Player, None, user.id)
        .await?;
    let state: AppState = test.to_app_state();

    let result = add_connection(
        State(state),
        Path(a.id),
        Form(ConnectionForm {
            connected_character_id: 999,
            relationship: "rivals".to_string(),
            details: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
