use axum::response::Html;

use crate::server::{
    error::Error,
    view::{context::MainContext, render},
};

/// Landing page
///
/// # Responses
/// - 200 (Success): Rendered main page
pub async fn index() -> Result<Html<String>, Error> {
    render("main/index.html", &MainContext::new())
}
