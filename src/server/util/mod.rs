//! Utility functions and helpers for server operations.
//!
//! Field validators shared by the branch and user forms, password hashing, display locale
//! and logging setup.

pub mod locale;
pub mod logging;
pub mod password;
pub mod validate;
