mod model;
mod server;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    startup::{self, shutdown_signal},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::app(AppState::new(db.clone()));

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    tracing::info!("Listening on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Database connection closed");

    Ok(())
}
