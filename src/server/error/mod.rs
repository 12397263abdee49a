//! Error types for the IMX server application.
//!
//! Domain errors (authentication, configuration, branches, users, form validation) live in
//! their own submodules and are aggregated by [`Error`]. Every error implements `IntoResponse`
//! so handlers can propagate them with `?`.

pub mod auth;
pub mod branch;
pub mod config;
pub mod user;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{
    auth::AuthError, branch::BranchError, config::ConfigError, user::UserError,
    validation::FormErrors,
};

/// Main error type for the IMX server application.
///
/// Uses `#[from]` so the underlying error types convert automatically via `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Branch lookup or lifecycle error.
    #[error(transparent)]
    BranchError(#[from] BranchError),
    /// User account lookup or lifecycle error.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// One or more submitted form fields were rejected.
    #[error(transparent)]
    Validation(#[from] FormErrors),
    /// Failed to parse a value from string or other format.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(String),
    /// Internal error indicating a bug in IMX's code.
    #[error("Internal error with IMX's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Template loading or rendering error.
    #[error(transparent)]
    TemplateError(#[from] tera::Error),
    /// Socket or file system error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 303 See Other - Not logged in, redirect to the login page
/// - 400 Bad Request - Rejected form data or refused operations
/// - 403 Forbidden - Logged in without staff permission
/// - 404 Not Found - Missing branch or user on admin pages
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::BranchError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::Validation(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Render a minimal error page.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let body = format!(
        "<!DOCTYPE html><html lang=\"ko\"><head><meta charset=\"utf-8\"><title>{status}</title></head>\
         <body><h1>{status}</h1><p>{message}</p></body></html>",
        status = status,
        message = tera::escape_html(message),
    );

    (status, Html(body)).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic page to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            "서버 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.",
        )
    }
}
