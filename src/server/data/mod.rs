//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! application. Repositories provide an abstraction layer over database
//! operations, organizing data access by domain. All timestamps are set here on
//! insert and update.

pub mod character;
pub mod connection;
pub mod team;
pub mod user;
