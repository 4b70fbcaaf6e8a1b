use std::future::Future;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Installs the global `tracing` subscriber.
///
/// Respects `RUST_LOG`, falling back to `info,tower_http=debug`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations to ensure the schema is up-to-date. This function
/// must complete successfully before the application can serve requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Resolves once the process receives Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = wait_for_signal(tokio::signal::ctrl_c(), "Ctrl-C");

    #[cfg(unix)]
    let terminate = wait_for_signal(
        async {
            let mut signal =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
            signal.recv().await;
            Ok::<(), std::io::Error>(())
        },
        "SIGTERM",
    );

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Waits on a signal listener. A listener that fails to register never resolves, so
/// the server keeps running on the remaining signals.
async fn wait_for_signal<F>(listener: F, name: &str)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = listener.await {
        tracing::error!("Failed to listen for {}: {}", name, e);
        std::future::pending::<()>().await;
    }
}
