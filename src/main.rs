use imx::server::{
    config::Config,
    model::app::AppState,
    startup,
    util::{locale, logging::init_logging},
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_logging("info");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    locale::init(config.locale());

    if let Err(e) = serve(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), imx::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;
    let app = startup::build_app(AppState::from(db), &config)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        address = %config.bind_address,
        language = %config.language_code,
        time_zone = %config.time_zone,
        "Starting server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
