use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Optional Discord webhook for team creation announcements; notifications
    /// are disabled entirely when unset.
    pub discord_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match std::env::var("PORT") {
            Ok(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => 3000,
        };

        let discord_webhook_url = std::env::var("DISCORD_WEBHOOK_URL").ok();

        Ok(Self {
            database_url,
            port,
            discord_webhook_url,
        })
    }
}
