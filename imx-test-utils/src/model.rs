//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main crate's `server::model::db` module.

pub type BranchModel = entity::branch::Model;
pub type UserModel = entity::user::Model;
