use entity::character::Role;
use varsity::server::{
    error::{team::TeamError, Error},
    notify::Notifier,
    service::team::TeamService,
};
use varsity_test_utils::prelude::*;

#[tokio::test]
/// Expect NotFound for an unknown team ID
async fn fails_for_nonexistent_team() -> Result<(), TestError> {
    let test = test_setup!()?;
    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let result = team_service.get_team_with_details(99).await;

    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::NotFound(99)))
    ));

    Ok(())
}

#[tokio::test]
/// Expect featured players to exclude private and archived characters
async fn excludes_private_and_archived_from_featured() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let team = test.team().insert_team("Ravens").await?;
    test.character()
        .insert_character("Public", Role::Player, Some(team.id), user.id)
        .await?;
    test.character()
        .insert_private_character("Hidden", Role::Player, Some(team.id), user.id)
        .await?;
    test.character()
        .insert_archived_character("Retired", Role::Player, Some(team.id), user.id)
        .await?;

    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let details = team_service.get_team_with_details(team.id).await.unwrap();

    assert_eq!(details.featured_players.len(), 1);
    assert_eq!(details.featured_players[0].name, "Public");
    // Counts are raw role counts, independent of visibility flags.
    assert_eq!(details.player_count, 3);

    Ok(())
}

#[tokio::test]
/// Expect at most six featured players
async fn caps_featured_players_at_six() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let team = test.team().insert_team("Ravens").await?;
    for i in 0..8 {
        test.character()
            .insert_character(&format!("Player {}", i), Role::Player, Some(team.id), user.id)
            .await?;
    }

    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let details = team_service.get_team_with_details(team.id).await.unwrap();

    assert_eq!(details.featured_players.len(), 6);
    assert_eq!(details.player_count, 8);

    Ok(())
}

#[tokio::test]
/// Expect featured players to carry their creator's username
async fn attaches_creator_usernames() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let team = test.team().insert_team("Ravens").await?;
    test.character()
        .insert_character("Jax", Role::Player, Some(team.id), user.id)
        .await?;

    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let details = team_service.get_team_with_details(team.id).await.unwrap();

    assert_eq!(
        details.featured_players[0].creator_username.as_deref(),
        Some("keeper")
    );

    Ok(())
}
