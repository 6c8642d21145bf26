use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CharacterError {
    #[error("Character not found")]
    NotFound(i32),
    #[error("Image URL required")]
    MissingImageUrl,
    #[error("Unknown character role: {0}")]
    InvalidRole(String),
    #[error("Connected character {0} not found")]
    ConnectionTargetNotFound(i32),
}

impl IntoResponse for CharacterError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) | Self::ConnectionTargetNotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingImageUrl | Self::InvalidRole(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
