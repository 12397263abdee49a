use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_page;

#[derive(Error, Debug)]
pub enum BranchError {
    #[error("Branch ID {0:?} not found")]
    NotFound(i32),
    #[error("Branch ID {0:?} is the default branch for user accounts and cannot be deleted")]
    DefaultBranchProtected(i32),
    #[error("Branch ID {branch_id:?} has no business hours for is_weekday = {is_weekday}")]
    MissingBusinessHour { branch_id: i32, is_weekday: bool },
    #[error("Branch ID {0:?} has no lesson duration configured")]
    MissingDuration(i32),
}

impl BranchError {
    /// Message shown to staff for this error.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "지점을 찾을 수 없습니다.",
            Self::DefaultBranchProtected(_) => "기본 지점은 삭제할 수 없습니다.",
            Self::MissingBusinessHour { .. } => "운영 시간을 먼저 등록해 주세요.",
            Self::MissingDuration(_) => "수업 시간을 먼저 등록해 주세요.",
        }
    }
}

impl IntoResponse for BranchError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                error_page(StatusCode::NOT_FOUND, self.message())
            }
            Self::DefaultBranchProtected(_) => {
                tracing::warn!("{}", self);

                error_page(StatusCode::BAD_REQUEST, self.message())
            }
            Self::MissingBusinessHour { .. } | Self::MissingDuration(_) => {
                tracing::debug!("{}", self);

                error_page(StatusCode::BAD_REQUEST, self.message())
            }
        }
    }
}
