//! Test fixture modules for database record creation.
//!
//! - `branch` - branch records and their operational metadata
//! - `user` - user accounts and their side tables

pub mod branch;
pub mod user;
