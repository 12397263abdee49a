//! HTTP handlers.
//!
//! Handlers extract the request, call into the service layer and render a template or
//! redirect. Public branch pages live in [`branch`], the login pages in [`auth`] and the
//! staff-only back-office in [`admin`].

pub mod admin;
pub mod auth;
pub mod branch;
pub mod main;
pub mod util;
