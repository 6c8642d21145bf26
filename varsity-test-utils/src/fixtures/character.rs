use chrono::Utc;
use entity::character::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct CharacterFixtures<'a> {
    db: &'a DatabaseConnection,
}

struct CharacterSeed {
    name: String,
    role: Role,
    team_id: Option<i32>,
    created_by: i32,
    jersey_number: Option<i32>,
    is_private: bool,
    is_archived: bool,
    gallery: Option<String>,
}

impl<'a> CharacterFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_character(
        &self,
        name: &str,
        role: Role,
        team_id: Option<i32>,
        created_by: i32,
    ) -> Result<entity::character::Model, TestError> {
        self.insert(CharacterSeed {
            name: name.to_string(),
            role,
            team_id,
            created_by,
            jersey_number: None,
            is_private: false,
            is_archived: false,
            gallery: None,
        })
        .await
    }

    pub async fn insert_archived_character(
        &self,
        name: &str,
        role: Role,
        team_id: Option<i32>,
        created_by: i32,
    ) -> Result<entity::character::Model, TestError> {
        self.insert(CharacterSeed {
            name: name.to_string(),
            role,
            team_id,
            created_by,
            jersey_number: None,
            is_private: false,
            is_archived: true,
            gallery: None,
        })
        .await
    }

    pub async fn insert_private_character(
        &self,
        name: &str,
        role: Role,
        team_id: Option<i32>,
        created_by: i32,
    ) -> Result<entity::character::Model, TestError> {
        self.insert(CharacterSeed {
            name: name.to_string(),
            role,
            team_id,
            created_by,
            jersey_number: None,
            is_private: true,
            is_archived: false,
            gallery: None,
        })
        .await
    }

    pub async fn insert_player_with_jersey(
        &self,
        name: &str,
        team_id: Option<i32>,
        created_by: i32,
        jersey_number: Option<i32>,
    ) -> Result<entity::character::Model, TestError> {
        self.insert(CharacterSeed {
            name: name.to_string(),
            role: Role::Player,
            team_id,
            created_by,
            jersey_number,
            is_private: false,
            is_archived: false,
            gallery: None,
        })
        .await
    }

    /// Insert a character with raw gallery text, valid or not
    pub async fn insert_character_with_gallery(
        &self,
        name: &str,
        created_by: i32,
        gallery: &str,
    ) -> Result<entity::character::Model, TestError> {
        self.insert(CharacterSeed {
            name: name.to_string(),
            role: Role::Civilian,
            team_id: None,
            created_by,
            jersey_number: None,
            is_private: false,
            is_archived: false,
            gallery: Some(gallery.to_string()),
        })
        .await
    }

    async fn insert(&self, seed: CharacterSeed) -> Result<entity::character::Model, TestError> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(seed.name),
            role: ActiveValue::Set(seed.role),
            team_id: ActiveValue::Set(seed.team_id),
            jersey_number: ActiveValue::Set(seed.jersey_number),
            is_private: ActiveValue::Set(seed.is_private),
            is_archived: ActiveValue::Set(seed.is_archived),
            gallery: ActiveValue::Set(seed.gallery),
            created_by: ActiveValue::Set(seed.created_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(character.insert(self.db).await?)
    }
}
