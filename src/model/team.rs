use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::FlashDto;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub city: Option<String>,
    pub mascot: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub is_active: bool,
}

impl From<entity::team::Model> for TeamDto {
    fn from(team: entity::team::Model) -> Self {
        Self {
            id: team.id,
            name: team.name,
            description: team.description,
            city: team.city,
            mascot: team.mascot,
            logo_url: team.logo_url,
            primary_color: team.primary_color,
            secondary_color: team.secondary_color,
            accent_color: team.accent_color,
            is_active: team.is_active,
        }
    }
}

/// Minimal team reference embedded in character views
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamRefDto {
    pub id: i32,
    pub name: String,
}

/// A team annotated with live player and staff counts
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TeamSummaryDto {
    pub team: TeamDto,
    pub player_count: u64,
    pub staff_count: u64,
}

/// A roster or featured entry: character essentials plus the creator's username
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TeamMemberDto {
    pub id: i32,
    pub name: String,
    pub avatar_url: Option<String>,
    pub role: String,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub creator_username: Option<String>,
}

/// View model for a single team page
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TeamDetailsDto {
    pub team: TeamDto,
    pub player_count: u64,
    pub staff_count: u64,
    /// Up to 6 public, non-archived players, newest first
    pub featured_players: Vec<TeamMemberDto>,
}

/// View model for the full team roster page
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TeamRosterDto {
    pub team: TeamDto,
    pub players: Vec<TeamMemberDto>,
    pub staff: Vec<TeamMemberDto>,
    pub player_count: u64,
    pub staff_count: u64,
}

/// View model for the team create/edit forms
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TeamFormViewDto {
    /// Present when editing an existing team
    pub team: Option<TeamDto>,
    pub flash: FlashDto,
}

/// View model for the home page
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HomeDto {
    pub teams: Vec<TeamDto>,
}

/// Input for creating a team; the service rejects an empty name
#[derive(Default)]
pub struct CreateTeam {
    pub name: String,
    pub description: Option<String>,
    pub city: Option<String>,
    pub mascot: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
}

/// Partial team update.
///
/// The outer `Option` distinguishes "field absent, keep the stored value" from
/// "field present"; for nullable columns the inner `Option` carries an explicit
/// clear (`Some(None)`).
#[derive(Default)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub mascot: Option<Option<String>>,
    pub logo_url: Option<Option<String>>,
    pub primary_color: Option<Option<String>>,
    pub secondary_color: Option<Option<String>>,
    pub accent_color: Option<Option<String>>,
    pub is_active: Option<bool>,
}
