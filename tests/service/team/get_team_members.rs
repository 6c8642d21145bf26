use entity::character::Role;
use varsity::server::{notify::Notifier, service::team::TeamService};
use varsity_test_utils::prelude::*;

#[tokio::test]
/// Expect no role filter to return players, staff, and civilians together
async fn lists_all_roles_without_filter() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let team = test.team().insert_team("Ravens").await?;
    test.character()
        .insert_character("Jax", Role::Player, Some(team.id), user.id)
        .await?;
    test.character()
        .insert_character("Vega", Role::Staff, Some(team.id), user.id)
        .await?;
    test.character()
        .insert_character("Fan", Role::Civilian, Some(team.id), user.id)
        .await?;

    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let members = team_service.get_team_members(team.id, None).await.unwrap();

    assert_eq!(members.len(), 3);

    Ok(())
}

#[tokio::test]
/// Expect a role filter to narrow the member list
async fn filters_by_role() -> Result<(), TestError> {
    let test = test_setup!()?;
    let user = test.user().insert_user("keeper").await?;
    let team = test.team().insert_team("Ravens").await?;
    test.character()
        .insert_character("Jax", Role::Player, Some(team.id), user.id)
        .await?;
    test.character()
        .insert_character("Vega", Role::Staff, Some(team.id), user.id)
        .await?;

    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let staff = team_service
        .get_team_members(team.id, Some(Role::Staff))
        .await
        .unwrap();

    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0].name, "Vega");

    Ok(())
}

#[tokio::test]
/// Expect an unknown team to yield an empty list rather than an error
async fn returns_empty_for_unknown_team() -> Result<(), TestError> {
    let test = test_setup!()?;
    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let members = team_service.get_team_members(99, None).await.unwrap();

    assert!(members.is_empty());

    Ok(())
}
