use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_page;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User ID {0:?} not found")]
    NotFound(i32),
    #[error("A password is required to create a superuser")]
    PasswordRequired,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                error_page(StatusCode::NOT_FOUND, "이용자를 찾을 수 없습니다.")
            }
            Self::PasswordRequired => {
                tracing::debug!("{}", self);

                error_page(StatusCode::BAD_REQUEST, "비밀번호를 입력해 주세요.")
            }
        }
    }
}
