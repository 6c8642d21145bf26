//! Tests for the team service.

mod get_team_members;
mod get_team_roster;
mod get_team_with_details;
mod update_team;
