//! HTTP controller endpoints for the Varsity web application.
//!
//! This module contains Axum handlers for authentication, characters, teams,
//! connections, and the dashboard. Controllers handle HTTP requests, validate
//! inputs, interact with services and repositories, and return view models or
//! redirects. They integrate with tower-sessions for session management and use
//! utoipa for OpenAPI documentation.

pub mod auth;
pub mod character;
pub mod connection;
pub mod dashboard;
pub mod home;
pub mod team;
pub mod util;

/// Normalizes an optional form value, treating the empty string as absent
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Maps a submitted nullable text field onto partial-update semantics: absent
/// keeps the stored value, an empty string clears it.
pub(crate) fn text_field(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| if v.is_empty() { None } else { Some(v) })
}

/// Maps a submitted nullable integer field; unparseable input stores null.
pub(crate) fn int_field(value: Option<String>) -> Option<Option<i32>> {
    value.map(|v| v.parse::<i32>().ok())
}

/// Maps a submitted checkbox field; absent means "leave unchanged".
pub(crate) fn bool_field(value: Option<String>) -> Option<bool> {
    value.map(|v| v == "on" || v == "true" || v == "1")
}
