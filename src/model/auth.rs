use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::FlashDto, character::CharacterRefDto};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub display_name: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
        }
    }
}

/// View model for the login and registration forms
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthViewDto {
    pub flash: FlashDto,
}

/// View model for the authenticated landing page
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub user: UserDto,
    /// Characters created by the logged in user
    pub characters: Vec<CharacterRefDto>,
    pub flash: FlashDto,
}

/// View model for the profile settings page
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProfileViewDto {
    pub user: UserDto,
    pub flash: FlashDto,
}

/// Input for registering a new user account
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Partial profile update; absent fields keep their stored values
#[derive(Default)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
}
