//! Utility functions for controller request handling.
//!
//! Resolves the staff account behind a back-office request from the session.

pub mod get_user;
