use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Team not found")]
    NotFound(i32),
    #[error("Name is required")]
    MissingName,
    #[error("A team with that name already exists")]
    NameTaken(String),
    #[error("Cannot delete {name} because it has {count} associated characters. Remove all characters from this team first.")]
    HasCharacters { name: String, count: u64 },
    #[error("Unknown role filter: {0}")]
    InvalidRole(String),
}

impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingName | Self::InvalidRole(_) => StatusCode::BAD_REQUEST,
            Self::NameTaken(_) | Self::HasCharacters { .. } => StatusCode::CONFLICT,
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
