use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct ConnectionFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConnectionFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_connection(
        &self,
        character_id: i32,
        connected_character_id: i32,
        relationship: &str,
    ) -> Result<entity::connection::Model, TestError> {
        let connection = entity::connection::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            connected_character_id: ActiveValue::Set(connected_character_id),
            relationship: ActiveValue::Set(relationship.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(connection.insert(self.db).await?)
    }
}
