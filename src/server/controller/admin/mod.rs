//! Back-office handlers under `/admin`.
//!
//! Every handler first resolves the staff account with
//! [`require_staff`](crate::server::controller::util::get_user::require_staff); anonymous
//! visitors and non-staff accounts are redirected to the login page.

pub mod branch;
pub mod user;

use axum::{extract::State, response::Html};
use tower_sessions::Session;

use crate::server::{
    controller::util::get_user::require_staff,
    error::Error,
    model::app::AppState,
    view::{context::AdminIndexContext, render},
};

/// Back-office index listing the managed models
///
/// # Responses
/// - 200 (Success): Rendered index
/// - 303 (See Other): Not logged in as active staff, redirect to the login page
pub async fn index(State(state): State<AppState>, session: Session) -> Result<Html<String>, Error> {
    let staff = require_staff(&state, &session).await?;

    render("admin/index.html", &AdminIndexContext::new(staff.username))
}
