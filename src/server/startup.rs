use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, MemoryStore, SessionManagerLayer,
};

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure session management with cookies signed by the secret key
pub fn build_session_layer(
    config: &Config,
) -> Result<SessionManagerLayer<MemoryStore, SignedCookie>, Error> {
    use time::Duration;

    let key = Key::try_from(config.secret_key.as_slice())
        .map_err(|e| Error::InternalError(format!("Invalid session signing key: {e}")))?;

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key);

    Ok(session)
}

/// Assemble routes, state, sessions and request tracing into the served application
pub fn build_app(state: AppState, config: &Config) -> Result<Router, Error> {
    let session = build_session_layer(config)?;

    Ok(router::routes(config)
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http()))
}
