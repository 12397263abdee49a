//! HTTP routing.
//!
//! Public pages, the login pages and the `/admin` back-office are registered here together
//! with the static and media file services.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::server::{config::Config, controller, model::app::AppState};

pub const LOGIN_PATH: &str = "/accounts/login";
pub const ADMIN_PATH: &str = "/admin";

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - Main page
/// - `GET /branches`, `POST /branches` - Branch list and branch creation
/// - `GET /branches/new` - Branch creation form
/// - `GET /branches/{id}` - Branch detail with hours, durations and timetable
/// - `GET /accounts/login`, `POST /accounts/login` - Login form and authentication
/// - `POST /accounts/logout` - Logout current user
/// - `/admin/...` - Staff-only back-office, see [`admin_routes`]
/// - `/static/...`, `/media/...` - Files under `STATIC_ROOT` and `MEDIA_ROOT`
pub fn routes(config: &Config) -> Router<AppState> {
    Router::new()
        .route("/", get(controller::main::index))
        .route(
            "/branches",
            get(controller::branch::index).post(controller::branch::create),
        )
        .route("/branches/new", get(controller::branch::new_branch))
        .route("/branches/{id}", get(controller::branch::detail))
        .route(
            LOGIN_PATH,
            get(controller::auth::login_page).post(controller::auth::login),
        )
        .route("/accounts/logout", post(controller::auth::logout))
        .nest(ADMIN_PATH, admin_routes())
        .nest_service("/static", ServeDir::new(&config.static_root))
        .nest_service("/media", ServeDir::new(&config.media_root))
}

/// Back-office routes, mounted under [`ADMIN_PATH`].
pub fn admin_routes() -> Router<AppState> {
    use controller::admin;

    Router::new()
        .route("/", get(admin::index))
        .route("/users", get(admin::user::list))
        .route(
            "/users/add",
            get(admin::user::add_page).post(admin::user::add),
        )
        .route("/users/action", post(admin::user::action))
        .route(
            "/users/{id}",
            get(admin::user::detail).post(admin::user::change),
        )
        .route("/branches", get(admin::branch::list))
        .route("/branches/{id}", get(admin::branch::detail))
        .route("/branches/{id}/active", post(admin::branch::set_active))
        .route("/branches/{id}/hours", post(admin::branch::set_business_hour))
        .route("/branches/{id}/duration", post(admin::branch::set_duration))
        .route(
            "/branches/{id}/timetable",
            post(admin::branch::generate_timetable),
        )
        .route("/branches/{id}/delete", post(admin::branch::delete))
}
