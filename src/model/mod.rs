//! Data transfer objects shared between services, handlers and templates.

pub mod branch;
pub mod form;
pub mod user;
