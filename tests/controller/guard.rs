//! Tests for the session gate middleware, exercised through the full router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::util::ServiceExt;
use varsity::server::{model::app::AppState, router, startup};
use varsity_test_utils::prelude::*;

async fn app(test: &TestContext) -> axum::Router {
    let state: AppState = test.to_app_state();

    router::routes()
        .with_state(state)
        .layer(startup::build_session_layer())
}

#[tokio::test]
/// Expect unauthenticated requests to guarded routes to redirect to login
async fn redirects_unauthenticated_dashboard_request() -> Result<(), TestError> {
    let test = test_setup!()?;
    let app = app(&test).await;

    let resp = app
        .oneshot(Request::builder().uri("/dashboard").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/auth/login");

    Ok(())
}

#[tokio::test]
/// Expect the character create form to be behind the session gate as well
async fn redirects_unauthenticated_character_create() -> Result<(), TestError> {
    let test = test_setup!()?;
    let app = app(&test).await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/characters/create")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/auth/login");

    Ok(())
}

#[tokio::test]
/// Expect public routes to pass through the gate untouched
async fn serves_public_routes_without_session() -> Result<(), TestError> {
    let test = test_setup!()?;
    let app = app(&test).await;

    let resp = app
        .oneshot(Request::builder().uri("/characters").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect POST submissions to guarded routes to redirect without running the handler
async fn redirects_unauthenticated_character_create_post() -> Result<(), TestError> {
    let test = test_setup!()?;
    let app = app(&test).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/characters/create")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("name=Jax&role=Player"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/auth/login");

    // The guarded handler never ran, so no character was persisted.
    use sea_orm::{EntityTrait, PaginatorTrait};
    let count = entity::prelude::Character::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}
