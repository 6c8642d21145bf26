//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the
//! application, so call sites don't import from the generated `entity` crate
//! directly.

/// A registered user account.
pub type UserModel = entity::user::Model;

/// An organization that characters may belong to.
pub type TeamModel = entity::team::Model;

/// A user-authored roleplay persona.
pub type CharacterModel = entity::character::Model;

/// A directed relationship between two characters.
pub type ConnectionModel = entity::connection::Model;

/// A song attached to a connection.
pub type ConnectionSongModel = entity::connection_song::Model;
