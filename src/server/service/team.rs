use std::collections::HashMap;

use entity::character::Role;
use sea_orm::DatabaseConnection;

use crate::{
    model::team::{CreateTeam, TeamDetailsDto, TeamMemberDto, TeamRosterDto, TeamSummaryDto, TeamUpdate},
    server::{
        data::{character::CharacterRepository, team::TeamRepository},
        error::{team::TeamError, Error},
        model::db::{CharacterModel, TeamModel},
        notify::Notifier,
    },
};

/// Service for team management and roster aggregation.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> TeamService<'a> {
    /// Creates a new instance of [`TeamService`]
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// All active teams, name-ascending
    pub async fn get_active_teams(&self) -> Result<Vec<TeamModel>, Error> {
        let teams = TeamRepository::new(self.db).get_active().await?;

        Ok(teams)
    }

    /// Every team annotated with live player and staff counts.
    ///
    /// Issues two count queries per team; O(teams) round trips is accepted at
    /// this scale.
    pub async fn get_all_teams_with_counts(&self) -> Result<Vec<TeamSummaryDto>, Error> {
        let teams = TeamRepository::new(self.db).get_all().await?;
        let character_repo = CharacterRepository::new(self.db);

        let mut summaries = Vec::with_capacity(teams.len());
        for team in teams {
            let player_count = character_repo.count_by_role(team.id, Role::Player).await?;
            let staff_count = character_repo.count_by_role(team.id, Role::Staff).await?;

            summaries.push(TeamSummaryDto {
                team: team.into(),
                player_count,
                staff_count,
            });
        }

        Ok(summaries)
    }

    /// A single team with counts and its featured players.
    ///
    /// # Returns
    /// - `Ok(TeamDetailsDto)` - Team found
    /// - `Err(Error::TeamError(TeamError::NotFound))` - Unknown team ID
    pub async fn get_team_with_details(&self, team_id: i32) -> Result<TeamDetailsDto, Error> {
        let team = TeamRepository::new(self.db)
            .get(team_id)
            .await?
            .ok_or(TeamError::NotFound(team_id))?;

        let character_repo = CharacterRepository::new(self.db);
        let player_count = character_repo.count_by_role(team.id, Role::Player).await?;
        let staff_count = character_repo.count_by_role(team.id, Role::Staff).await?;

        let featured = character_repo.featured_players(team.id).await?;
        let usernames = character_repo.creator_usernames(&featured).await?;
        let featured_players = featured
            .into_iter()
            .map(|c| to_member_dto(c, &usernames))
            .collect();

        Ok(TeamDetailsDto {
            team: team.into(),
            player_count,
            staff_count,
            featured_players,
        })
    }

    /// The full roster: players (jersey number then name) and staff (name),
    /// archived characters excluded.
    pub async fn get_team_roster(&self, team_id: i32) -> Result<TeamRosterDto, Error> {
        let team = TeamRepository::new(self.db)
            .get(team_id)
            .await?
            .ok_or(TeamError::NotFound(team_id))?;

        let character_repo = CharacterRepository::new(self.db);
        let players = character_repo.team_members(team.id, Some(Role::Player)).await?;
        let staff = character_repo.team_members(team.id, Some(Role::Staff)).await?;

        let player_usernames = character_repo.creator_usernames(&players).await?;
        let staff_usernames = character_repo.creator_usernames(&staff).await?;

        let player_count = players.len() as u64;
        let staff_count = staff.len() as u64;

        Ok(TeamRosterDto {
            team: team.into(),
            players: players
                .into_iter()
                .map(|c| to_member_dto(c, &player_usernames))
                .collect(),
            staff: staff
                .into_iter()
                .map(|c| to_member_dto(c, &staff_usernames))
                .collect(),
            player_count,
            staff_count,
        })
    }

    /// Creates a team and fires the best-effort creation notification.
    ///
    /// # Returns
    /// - `Ok(TeamModel)` - Team created; notification dispatched on its own task
    /// - `Err(Error::TeamError(TeamError::MissingName))` - Empty name
    /// - `Err(Error::TeamError(TeamError::NameTaken))` - Case-sensitive name collision
    pub async fn create_team(&self, data: CreateTeam) -> Result<TeamModel, Error> {
        if data.name.is_empty() {
            return Err(TeamError::MissingName.into());
        }

        let team_repo = TeamRepository::new(self.db);

        if team_repo.get_by_name(&data.name).await?.is_some() {
            return Err(TeamError::NameTaken(data.name).into());
        }

        let team = team_repo.create(&data).await?;

        // Delivery failures are logged inside the notifier and never roll back
        // the create.
        self.notifier.team_created(&team);

        Ok(team)
    }

    /// Applies a partial team update, re-checking name uniqueness when the name
    /// changes.
    pub async fn update_team(&self, team_id: i32, update: TeamUpdate) -> Result<TeamModel, Error> {
        let team_repo = TeamRepository::new(self.db);

        let team = team_repo
            .get(team_id)
            .await?
            .ok_or(TeamError::NotFound(team_id))?;

        if let Some(name) = &update.name {
            if *name != team.name && team_repo.get_by_name(name).await?.is_some() {
                return Err(TeamError::NameTaken(name.clone()).into());
            }
        }

        let team = team_repo.update(team, update).await?;

        Ok(team)
    }

    /// Deletes a team unless any character still references it.
    ///
    /// # Returns
    /// - `Ok(())` - Team deleted
    /// - `Err(Error::TeamError(TeamError::NotFound))` - Unknown team ID
    /// - `Err(Error::TeamError(TeamError::HasCharacters))` - Blocked; the error
    ///   names the live referencing count
    pub async fn delete_team(&self, team_id: i32) -> Result<(), Error> {
        let team_repo = TeamRepository::new(self.db);

        let team = team_repo
            .get(team_id)
            .await?
            .ok_or(TeamError::NotFound(team_id))?;

        let count = CharacterRepository::new(self.db)
            .count_for_team(team.id)
            .await?;

        if count > 0 {
            return Err(TeamError::HasCharacters {
                name: team.name,
                count,
            }
            .into());
        }

        team_repo.delete(team.id).await?;

        Ok(())
    }

    /// Non-archived members of a team, optionally filtered by role.
    ///
    /// An unknown team simply yields an empty list.
    pub async fn get_team_members(
        &self,
        team_id: i32,
        role: Option<Role>,
    ) -> Result<Vec<TeamMemberDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let members = character_repo.team_members(team_id, role).await?;
        let usernames = character_repo.creator_usernames(&members).await?;

        Ok(members
            .into_iter()
            .map(|c| to_member_dto(c, &usernames))
            .collect())
    }
}

fn to_member_dto(character: CharacterModel, usernames: &HashMap<i32, String>) -> TeamMemberDto {
    let creator_username = usernames.get(&character.created_by).cloned();

    TeamMemberDto {
        id: character.id,
        name: character.name,
        avatar_url: character.avatar_url,
        role: character.role.to_string(),
        position: character.position,
        jersey_number: character.jersey_number,
        creator_username,
    }
}
