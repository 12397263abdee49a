//! Server application core modules.
//!
//! This module contains all server-side functionality for the IMX back-office: HTTP routing,
//! session-based staff login, branch and account persistence, form validation and template
//! rendering. The `admin` module holds the declarative list and detail page configuration
//! for each managed entity.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod admin;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod view;
