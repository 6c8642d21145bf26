use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{ProfileUpdate, RegisterUser},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::db::UserModel,
    },
};

/// Service for account registration, credential checks, and profile management.
///
/// Password handling is delegated to the bcrypt primitive; only hashes are ever
/// stored or compared.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, Error> {
        let user = UserRepository::new(self.db).get_by_username(username).await?;

        Ok(user.is_some())
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, Error> {
        let user = UserRepository::new(self.db).get_by_email(email).await?;

        Ok(user.is_some())
    }

    /// Registers a new user account.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Account created, password stored as a bcrypt hash
    /// - `Err(Error::AuthError(AuthError::UsernameTaken))` - Username already registered
    /// - `Err(Error::AuthError(AuthError::EmailTaken))` - Email already registered
    pub async fn register(&self, data: RegisterUser) -> Result<UserModel, Error> {
        if self.username_exists(&data.username).await? {
            return Err(AuthError::UsernameTaken.into());
        }
        if self.email_exists(&data.email).await? {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = bcrypt::hash(&data.password, bcrypt::DEFAULT_COST)?;

        let user = UserRepository::new(self.db)
            .create(&data.username, &data.email, password_hash, &data.display_name)
            .await?;

        Ok(user)
    }

    /// Verifies a username/password pair.
    ///
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials` so
    /// the response doesn't reveal which half was wrong.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<UserModel, Error> {
        let Some(user) = UserRepository::new(self.db).get_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    pub async fn get_profile(&self, user_id: i32) -> Result<UserModel, Error> {
        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))?;

        Ok(user)
    }

    /// Applies a partial profile update; fails with `UserNotFound` for an
    /// unknown user ID.
    pub async fn update_profile(
        &self,
        user_id: i32,
        update: ProfileUpdate,
    ) -> Result<UserModel, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))?;

        let user = user_repo.update_profile(user, update).await?;

        Ok(user)
    }

    /// Replaces the stored password hash after verifying the current password.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Password replaced
    /// - `Err(Error::AuthError(AuthError::UserNotFound))` - Unknown user ID
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Current password mismatch
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<UserModel, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))?;

        if !bcrypt::verify(current_password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let password_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)?;
        let user = user_repo.set_password_hash(user, password_hash).await?;

        Ok(user)
    }
}
