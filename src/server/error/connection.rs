use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Connection not found")]
    NotFound(i32),
    #[error("Spotify URL required")]
    MissingSpotifyUrl,
}

impl IntoResponse for ConnectionError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingSpotifyUrl => StatusCode::BAD_REQUEST,
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
