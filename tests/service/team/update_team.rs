use varsity::{
    model::team::TeamUpdate,
    server::{
        error::{team::TeamError, Error},
        notify::Notifier,
        service::team::TeamService,
    },
};
use varsity_test_utils::prelude::*;

#[tokio::test]
/// Expect absent fields to keep stored values (partial-update semantics)
async fn keeps_absent_fields() -> Result<(), TestError> {
    let test = test_setup!()?;
    let team = test.team().insert_team_in_city("Ravens", "Harbor City").await?;
    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let updated = team_service
        .update_team(
            team.id,
            TeamUpdate {
                mascot: Some(Some("Riptide".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Ravens");
    assert_eq!(updated.city.as_deref(), Some("Harbor City"));
    assert_eq!(updated.mascot.as_deref(), Some("Riptide"));

    Ok(())
}

#[tokio::test]
/// Expect an explicitly cleared field to store null
async fn clears_explicitly_empty_fields() -> Result<(), TestError> {
    let test = test_setup!()?;
    let team = test.team().insert_team_in_city("Ravens", "Harbor City").await?;
    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let updated = team_service
        .update_team(
            team.id,
            TeamUpdate {
                city: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.city.is_none());

    Ok(())
}

#[tokio::test]
/// Expect a name change onto another team's name to conflict
async fn rejects_name_collision() -> Result<(), TestError> {
    let test = test_setup!()?;
    test.team().insert_team("Ravens").await?;
    let team = test.team().insert_team("Comets").await?;
    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let result = team_service
        .update_team(
            team.id,
            TeamUpdate {
                name: Some("Ravens".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::NameTaken(_)))
    ));

    Ok(())
}

#[tokio::test]
/// Expect re-submitting the team's own name to pass the uniqueness check
async fn allows_unchanged_name() -> Result<(), TestError> {
    let test = test_setup!()?;
    let team = test.team().insert_team("Ravens").await?;
    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let result = team_service
        .update_team(
            team.id,
            TeamUpdate {
                name: Some("Ravens".to_string()),
                description: Some(Some("Founding franchise".to_string())),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().description.as_deref(),
        Some("Founding franchise")
    );

    Ok(())
}

#[tokio::test]
/// Expect NotFound when updating a team that does not exist
async fn fails_for_nonexistent_team() -> Result<(), TestError> {
    let test = test_setup!()?;
    let notifier = Notifier::new(None);
    let team_service = TeamService::new(&test.db, &notifier);

    let result = team_service.update_team(99, TeamUpdate::default()).await;

    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::NotFound(99)))
    ));

    Ok(())
}
