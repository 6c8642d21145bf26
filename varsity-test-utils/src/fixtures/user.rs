use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Minimum bcrypt cost keeps fixture hashing fast in tests
const FIXTURE_HASH_COST: u32 = 4;

pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a user with a placeholder password
    pub async fn insert_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user_with_password(username, "placeholder-password")
            .await
    }

    /// Insert a user whose password hash verifies against `password`
    pub async fn insert_user_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::user::Model, TestError> {
        let password_hash = bcrypt::hash(password, FIXTURE_HASH_COST)?;

        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(format!("{}@example.com", username)),
            password_hash: ActiveValue::Set(password_hash),
            display_name: ActiveValue::Set(username.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }
}
