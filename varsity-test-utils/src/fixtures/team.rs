use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct TeamFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_team(&self, name: &str) -> Result<entity::team::Model, TestError> {
        self.insert(name, None, true).await
    }

    pub async fn insert_team_in_city(
        &self,
        name: &str,
        city: &str,
    ) -> Result<entity::team::Model, TestError> {
        self.insert(name, Some(city.to_string()), true).await
    }

    pub async fn insert_inactive_team(
        &self,
        name: &str,
    ) -> Result<entity::team::Model, TestError> {
        self.insert(name, None, false).await
    }

    async fn insert(
        &self,
        name: &str,
        city: Option<String>,
        is_active: bool,
    ) -> Result<entity::team::Model, TestError> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            city: ActiveValue::Set(city),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(team.insert(self.db).await?)
    }
}
