pub use super::character::Entity as Character;
pub use super::connection::Entity as Connection;
pub use super::connection_song::Entity as ConnectionSong;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
