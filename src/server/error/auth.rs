use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::server::{error::error_page, router::LOGIN_PATH};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User ID {0:?} is not an active staff member")]
    PermissionDenied(i32),
    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl AuthError {
    /// Message shown on the login form.
    pub const INVALID_CREDENTIALS_MESSAGE: &'static str =
        "아이디 또는 비밀번호가 올바르지 않습니다.";
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Redirect::to(LOGIN_PATH).into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Redirect::to(LOGIN_PATH).into_response()
            }
            Self::PermissionDenied(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Redirect::to(LOGIN_PATH).into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                error_page(StatusCode::BAD_REQUEST, Self::INVALID_CREDENTIALS_MESSAGE)
            }
        }
    }
}
