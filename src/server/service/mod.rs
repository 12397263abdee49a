//! Service layer for business logic.
//!
//! Services validate submitted forms, coordinate repositories and run multi-row writes inside
//! database transactions. Services include branch management with operational metadata, user
//! account management and the back-office list operations.

pub mod admin;
pub mod branch;
pub mod user;
