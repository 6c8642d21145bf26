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

    let result = team_service.get_team_roster(99).await;

    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::NotFound(99)))
    ));

    Ok(())
}

#[tokio::test]
/// Expect players ordered by jersey then name, staff by name, archived excluded
async fn splits_roster_by_role_with_ordering() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let team = test.team().insert_team("Ravens").await?;

    test.character()
        .insert_player_with_jersey("Brooks", Some(team.id), user.id, Some(21))
        .await?;
    test.character()
        .insert_player_with_jersey("Avery", Some(team.id), user.id, Some(7))
        .await?;
    test.character()
        .insert_character("Vega", Role::Staff, Some(team.id), user.id)
        .await?;
    test.character()
        .insert_character("Quinn", Role::Staff, Some(team.id), user.id)
        .await?;
    test.character()
        .insert_archived_character("Retired", Role::Player, Some(team.id), user.id)
        .await?;

    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let roster = team_service.get_team_roster(team.id).await.unwrap();

    let player_names: Vec<&str> = roster.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(player_names, vec!["Avery", "Brooks"]);

    let staff_names: Vec<&str> = roster.staff.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(staff_names, vec!["Quinn", "Vega"]);

    assert_eq!(roster.player_count, 2);
    assert_eq!(roster.staff_count, 2);

    Ok(())
}
