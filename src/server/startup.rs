//! Process initialization: logging, database, outbound HTTP client and the server loop.

use std::{net::SocketAddr, time::Duration};

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, state::AppState};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration. When
/// `RUN_MIGRATIONS` is enabled all pending SeaORM migrations are applied before the
/// connection is handed out.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database, migrated if configured
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if config.run_migrations {
        run_migrations(&db).await?;
    }

    Ok(db)
}

pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), AppError> {
    Migrator::up(db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(())
}

/// HTTP client shared by the Steam and legacy import services.
///
/// Redirects are disabled so OpenID verification only ever talks to the configured
/// endpoint.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?)
}

/// Binds `BIND_ADDRESS` and serves the API until Ctrl+C or SIGTERM.
pub async fn serve(config: Config, db: DatabaseConnection) -> Result<(), AppError> {
    let http_client = setup_reqwest_client()?;
    let state = AppState::new(db, http_client, &config);

    let app = router::router(&config)?.with_state(state);

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
