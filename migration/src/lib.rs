pub use sea_orm_migration::prelude::*;

mod m20251102_000001_user;
mod m20251102_000002_team;
mod m20251102_000003_character;
mod m20251102_000004_connection;
mod m20251102_000005_connection_song;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251102_000001_user::Migration),
            Box::new(m20251102_000002_team::Migration),
            Box::new(m20251102_000003_character::Migration),
            Box::new(m20251102_000004_connection::Migration),
            Box::new(m20251102_000005_connection_song::Migration),
        ]
    }
}
