//! Tests for character controller endpoints.

mod connections;
mod edit;
mod profile;
