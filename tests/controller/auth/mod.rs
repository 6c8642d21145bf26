//! Tests for authentication controller endpoints.

mod logout;
