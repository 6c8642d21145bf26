//! Test context structure and utilities.
//!
//! Provides the `TestContext` returned by `TestBuilder`: an in-memory SQLite
//! database, a memory-store session, and accessors for the fixture helpers.

use std::sync::Arc;

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema};
use tower_sessions::{MemoryStore, Session};

use crate::{
    error::TestError,
    fixtures::{
        character::CharacterFixtures, connection::ConnectionFixtures, team::TeamFixtures,
        user::UserFixtures,
    },
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) (or the
/// `test_setup!` macro) rather than constructing it directly.
///
/// ```ignore
/// let test = test_setup!()?;
///
/// let user = test.user().insert_user("keeper").await?;
/// let team = test.team().insert_team("Ravens").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-process memory store
    pub session: Session,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Create all application tables from the entity definitions.
    pub(crate) async fn create_tables(&self) -> Result<(), TestError> {
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::User),
            schema.create_table_from_entity(entity::prelude::Team),
            schema.create_table_from_entity(entity::prelude::Character),
            schema.create_table_from_entity(entity::prelude::Connection),
            schema.create_table_from_entity(entity::prelude::ConnectionSong),
        ];

        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Convert the database connection into any type that can be constructed
    /// from it
    ///
    /// This allows conversion to AppState without creating a circular
    /// dependency between the test-utils crate and the main varsity crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures::new(&self.db)
    }

    pub fn team(&self) -> TeamFixtures<'_> {
        TeamFixtures::new(&self.db)
    }

    pub fn character(&self) -> CharacterFixtures<'_> {
        CharacterFixtures::new(&self.db)
    }

    pub fn connection(&self) -> ConnectionFixtures<'_> {
        ConnectionFixtures::new(&self.db)
    }
}
