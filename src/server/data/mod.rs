//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (branches with their operational metadata, and user accounts).

pub mod branch;
pub mod user;
