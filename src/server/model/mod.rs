//! Server application models and type definitions.
//!
//! Application state, the account capability trait, database model type aliases and typed
//! session data.

pub mod account;
pub mod app;
pub mod db;
pub mod session;
