use chrono::NaiveDate;
use entity::character::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::team::{TeamDto, TeamRefDto};

/// One gallery entry as stored (serialized) on the character row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GalleryImage {
    pub url: String,
    pub caption: Option<String>,
}

/// Minimal character reference (used by connection affordances and dashboards)
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CharacterRefDto {
    pub id: i32,
    pub name: String,
}

/// Character reference with avatar, used for connection endpoints
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CharacterCardDto {
    pub id: i32,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl From<entity::character::Model> for CharacterCardDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            avatar_url: character.avatar_url,
        }
    }
}

/// Directory row: character plus its team name and creator username
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CharacterListItemDto {
    pub id: i32,
    pub name: String,
    pub avatar_url: Option<String>,
    pub role: String,
    pub team: Option<TeamRefDto>,
    pub creator_username: Option<String>,
}

/// Full character record rendered on the profile and edit pages
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub nickname: Option<String>,
    pub age: Option<i32>,
    pub birthday: Option<NaiveDate>,
    pub zodiac: Option<String>,
    pub hometown: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub sexuality: Option<String>,
    pub pronouns: Option<String>,
    pub languages: Option<String>,
    pub religion: Option<String>,
    pub gender: Option<String>,
    pub url: Option<String>,
    pub role: String,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub team_id: Option<i32>,
    pub job: Option<String>,
    pub bio: Option<String>,
    pub faceclaim: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub sidebar_url: Option<String>,
    pub spotify_embed: Option<String>,
    pub quote: Option<String>,
    pub personality: Option<String>,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    pub likes: Option<String>,
    pub dislikes: Option<String>,
    pub fears: Option<String>,
    pub goals: Option<String>,
    pub appearance: Option<String>,
    pub background: Option<String>,
    pub skills: Option<String>,
    pub fav_food: Option<String>,
    pub fav_music: Option<String>,
    pub fav_movies: Option<String>,
    pub fav_color: Option<String>,
    pub fav_sports: Option<String>,
    pub inspiration: Option<String>,
    pub full_bio: Option<String>,
    pub is_private: bool,
    pub is_archived: bool,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(c: entity::character::Model) -> Self {
        Self {
            id: c.id,
            name: c.name,
            nickname: c.nickname,
            age: c.age,
            birthday: c.birthday,
            zodiac: c.zodiac,
            hometown: c.hometown,
            education: c.education,
            occupation: c.occupation,
            sexuality: c.sexuality,
            pronouns: c.pronouns,
            languages: c.languages,
            religion: c.religion,
            gender: c.gender,
            url: c.url,
            role: c.role.to_string(),
            position: c.position,
            jersey_number: c.jersey_number,
            team_id: c.team_id,
            job: c.job,
            bio: c.bio,
            faceclaim: c.faceclaim,
            avatar_url: c.avatar_url,
            banner_url: c.banner_url,
            sidebar_url: c.sidebar_url,
            spotify_embed: c.spotify_embed,
            quote: c.quote,
            personality: c.personality,
            strengths: c.strengths,
            weaknesses: c.weaknesses,
            likes: c.likes,
            dislikes: c.dislikes,
            fears: c.fears,
            goals: c.goals,
            appearance: c.appearance,
            background: c.background,
            skills: c.skills,
            fav_food: c.fav_food,
            fav_music: c.fav_music,
            fav_movies: c.fav_movies,
            fav_color: c.fav_color,
            fav_sports: c.fav_sports,
            inspiration: c.inspiration,
            full_bio: c.full_bio,
            is_private: c.is_private,
            is_archived: c.is_archived,
        }
    }
}

/// The creating user as shown on a profile
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatorDto {
    pub id: i32,
    pub username: String,
}

/// A connection as listed on a character profile
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ConnectionItemDto {
    pub id: i32,
    pub relationship: String,
    pub details: Option<String>,
    pub connected_character: Option<CharacterCardDto>,
}

/// View model for a character profile page
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CharacterProfileDto {
    pub character: CharacterDto,
    pub team: Option<TeamRefDto>,
    pub creator: Option<CreatorDto>,
    pub gallery: Vec<GalleryImage>,
    pub connections: Vec<ConnectionItemDto>,
    /// Every other character, for the add-connection affordance
    pub all_characters: Vec<CharacterRefDto>,
    /// Whether the session user created this character
    pub is_owner: bool,
}

/// View model for the character create form
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CharacterCreateViewDto {
    pub teams: Vec<TeamDto>,
}

/// View model for the character edit form
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CharacterEditViewDto {
    pub character: CharacterDto,
    pub teams: Vec<TeamDto>,
}

/// Input for creating a character; `created_by` always comes from the session
pub struct NewCharacter {
    pub name: String,
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
    pub team_id: Option<i32>,
    pub role: Role,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub bio: Option<String>,
    pub created_by: i32,
}

/// Partial character update.
///
/// The outer `Option` distinguishes "field absent, keep the stored value" from
/// "field present"; for nullable columns the inner `Option` carries an explicit
/// clear (`Some(None)`). `created_by` is intentionally absent: ownership is
/// fixed at creation.
#[derive(Default)]
pub struct CharacterUpdate {
    pub name: Option<String>,
    pub nickname: Option<Option<String>>,
    pub age: Option<Option<i32>>,
    pub birthday: Option<Option<NaiveDate>>,
    pub zodiac: Option<Option<String>>,
    pub hometown: Option<Option<String>>,
    pub education: Option<Option<String>>,
    pub occupation: Option<Option<String>>,
    pub sexuality: Option<Option<String>>,
    pub pronouns: Option<Option<String>>,
    pub languages: Option<Option<String>>,
    pub religion: Option<Option<String>>,
    pub gender: Option<Option<String>>,
    pub url: Option<Option<String>>,
    pub role: Option<Role>,
    pub position: Option<Option<String>>,
    pub jersey_number: Option<Option<i32>>,
    pub team_id: Option<Option<i32>>,
    pub job: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub faceclaim: Option<Option<String>>,
    pub avatar_url: Option<Option<String>>,
    pub banner_url: Option<Option<String>>,
    pub sidebar_url: Option<Option<String>>,
    pub spotify_embed: Option<Option<String>>,
    pub quote: Option<Option<String>>,
    pub personality: Option<Option<String>>,
    pub strengths: Option<Option<String>>,
    pub weaknesses: Option<Option<String>>,
    pub likes: Option<Option<String>>,
    pub dislikes: Option<Option<String>>,
    pub fears: Option<Option<String>>,
    pub goals: Option<Option<String>>,
    pub appearance: Option<Option<String>>,
    pub background: Option<Option<String>>,
    pub skills: Option<Option<String>>,
    pub fav_food: Option<Option<String>>,
    pub fav_music: Option<Option<String>>,
    pub fav_movies: Option<Option<String>>,
    pub fav_color: Option<Option<String>>,
    pub fav_sports: Option<Option<String>>,
    pub inspiration: Option<Option<String>>,
    pub full_bio: Option<Option<String>>,
    pub is_private: Option<bool>,
    pub is_archived: Option<bool>,
    /// Replaces the stored gallery text wholesale when present
    pub gallery: Option<Option<String>>,
}
