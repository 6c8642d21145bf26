use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::api::FlashDto, server::error::Error};

pub const SESSION_FLASH_KEY: &str = "varsity:flash";

/// One-shot messages carried across a redirect and drained on the next render.
#[derive(Default, Deserialize, Serialize, Debug, Clone)]
pub struct SessionFlash {
    pub success: Vec<String>,
    pub error: Vec<String>,
}

impl SessionFlash {
    /// Append a success message to the pending flash data
    pub async fn push_success(session: &Session, message: &str) -> Result<(), Error> {
        let mut flash: SessionFlash = session
            .get(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();

        flash.success.push(message.to_string());
        session.insert(SESSION_FLASH_KEY, flash).await?;

        Ok(())
    }

    /// Append an error message to the pending flash data
    pub async fn push_error(session: &Session, message: &str) -> Result<(), Error> {
        let mut flash: SessionFlash = session
            .get(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();

        flash.error.push(message.to_string());
        session.insert(SESSION_FLASH_KEY, flash).await?;

        Ok(())
    }

    /// Remove and return all pending flash messages; absent data yields an
    /// empty set so rendering never fails on a fresh session.
    pub async fn take(session: &Session) -> Result<SessionFlash, Error> {
        let flash = session
            .remove::<SessionFlash>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();

        Ok(flash)
    }
}

impl From<SessionFlash> for FlashDto {
    fn from(flash: SessionFlash) -> Self {
        Self {
            success: flash.success,
            error: flash.error,
        }
    }
}
