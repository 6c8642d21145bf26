use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use chrono::NaiveDate;
use entity::character::Role;
use sea_orm::EntityTrait;
use varsity::server::{
    controller::character::{update_character, CharacterEditForm},
    model::{app::AppState, gallery},
};
use varsity_test_utils::prelude::*;

fn empty_form() -> CharacterEditForm {
    CharacterEditForm {
        name: None,
        nickname: None,
        age: None,
        birthday: None,
        zodiac: None,
        hometown: None,
        education: None,
        occupation: None,
        sexuality: None,
        pronouns: None,
        languages: None,
        religion: None,
        gender: None,
        url: None,
        role: None,
        position: None,
        jersey_number: None,
        team_id: None,
        job: None,
        bio: None,
        faceclaim: None,
        avatar_url: None,
        banner_url: None,
        sidebar_url: None,
        spotify_embed: None,
        quote: None,
        personality: None,
        strengths: None,
        weaknesses: None,
        likes: None,
        dislikes: None,
        fears: None,
        goals: None,
        appearance: None,
        background: None,
        skills: None,
        fav_food: None,
        fav_music: None,
        fav_movies: None,
        fav_color: None,
        fav_sports: None,
        inspiration: None,
        full_bio: None,
        is_private: None,
        is_archived: None,
        gallery: None,
    }
}

#[tokio::test]
/// Expect an unparseable birthday to store null without failing the request
async fn nulls_invalid_birthday() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let character = test
        .character()
        .insert_character("Jax", Role::Player, None, user.id)
        .await?;
    let state: AppState = test.to_app_state();

    let mut form = empty_form();
    form.birthday = Some("not-a-date".to_string());

    let result = update_character(State(state), Path(character.id), Form(form)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let stored = entity::prelude::Character::find_by_id(character.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(stored.birthday.is_none());

    Ok(())
}

#[tokio::test]
/// Expect a well-formed birthday to parse and store
async fn stores_valid_birthday() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let character = test
        .character()
        .insert_character("Jax", Role::Player, None, user.id)
        .await?;
    let state: AppState = test.to_app_state();

    let mut form = empty_form();
    form.birthday = Some("1999-04-17".to_string());

    update_character(State(state), Path(character.id), Form(form))
        .await
        .unwrap();

    let stored = entity::prelude::Character::find_by_id(character.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.birthday, NaiveDate::from_ymd_opt(1999, 4, 17));

    Ok(())
}

#[tokio::test]
/// Expect empty strings to clear fields while absent fields keep stored values
async fn normalizes_empty_strings_to_null() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let character = test
        .character()
        .insert_character("Jax", Role::Player, None, user.id)
        .await?;
    let state: AppState = test.to_app_state();

    // Seed nickname and hometown first.
    let mut seed = empty_form();
    seed.nickname = Some("Sparky".to_string());
    seed.hometown = Some("Harbor City".to_string());
    update_character(State(state.clone()), Path(character.id), Form(seed))
        .await
        .unwrap();

    // Clear nickname explicitly; leave hometown out of the form entirely.
    let mut form = empty_form();
    form.nickname = Some("".to_string());
    update_character(State(state), Path(character.id), Form(form))
        .await
        .unwrap();

    let stored = entity::prelude::Character::find_by_id(character.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(stored.nickname.is_none());
    assert_eq!(stored.hometown.as_deref(), Some("Harbor City"));

    Ok(())
}

#[tokio::test]
/// Expect a submitted gallery URL list to replace the stored gallery wholesale
async fn overwrites_gallery_from_url_list() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let stored = r#"[{"url":"https://img/old.png","caption":"old"}]"#;
    let character = test
        .character()
        .insert_character_with_gallery("Jax", user.id, stored)
        .await?;
    let state: AppState = test.to_app_state();

    let mut form = empty_form();
    form.gallery = Some("https://img/a.png, https://img/b.png".to_string());

    update_character(State(state), Path(character.id), Form(form))
        .await
        .unwrap();

    let stored = entity::prelude::Character::find_by_id(character.id)
        .one(&test.db)
        .await?
        .unwrap();
    let images = gallery::decode(stored.gallery.as_deref());

    assert_eq!(images.len(), 2);
    assert_eq!(images[0].url, "https://img/a.png");
    assert_eq!(images[1].url, "https://img/b.png");

    Ok(())
}

#[tokio::test]
/// Expect 404 when editing a character that does not exist
async fn fails_for_unknown_character() -> Result<(), TestError> {
    let test = test_setup!()?;
    let state: AppState = test.to_app_state();

    let result = update_character(State(state), Path(99), Form(empty_form())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
