use sea_orm::DatabaseConnection;

use crate::server::notify::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub notifier: Notifier,
}

/// Allows test utilities to build an `AppState` from a bare database connection
/// without depending on this crate; the notifier starts disabled.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            notifier: Notifier::new(None),
        }
    }
}
