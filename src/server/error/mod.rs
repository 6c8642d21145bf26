//! Error types for the Varsity server application.
//!
//! This module provides the error handling system with specialized error types for
//! each domain (authentication, teams, characters, connections, configuration).
//! All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror`
//! for ergonomic error definitions.

pub mod auth;
pub mod character;
pub mod config;
pub mod connection;
pub mod team;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, character::CharacterError, config::ConfigError,
        connection::ConnectionError, team::TeamError,
    },
};

/// Main error type for the Varsity server application.
///
/// Aggregates all domain-specific error types and external library errors into a
/// single unified error type. `thiserror`'s `#[from]` attribute enables automatic
/// conversion from underlying error types via the `?` operator; the `IntoResponse`
/// implementation maps errors to appropriate HTTP responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, credential, registration conflicts).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Team error (missing team, name validation/conflict, blocked delete).
    #[error(transparent)]
    TeamError(#[from] TeamError),
    /// Character error (missing character, gallery validation).
    #[error(transparent)]
    CharacterError(#[from] CharacterError),
    /// Connection error (missing connection).
    #[error(transparent)]
    ConnectionError(#[from] ConnectionError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Varsity's code.
    #[error("Internal error with Varsity's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Password hashing error from the bcrypt primitive.
    #[error(transparent)]
    HashError(#[from] bcrypt::BcryptError),
    /// Serialization error (gallery encoding, webhook payloads).
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::TeamError(err) => err.into_response(),
            Self::CharacterError(err) => err.into_response(),
            Self::ConnectionError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server
/// Error response.
///
/// Logs the error message and returns a generic "Internal server error" body to
/// avoid leaking implementation details. Used as a fallback for errors that don't
/// have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
