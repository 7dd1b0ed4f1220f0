use gs_auth::JwtValidator;
use gs_server::{AppState, build_router, error::ServerError, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = gs_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = gs_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gs-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/gs-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Create JWT validator; validate() guarantees exactly one key source
    let jwt_validator = if let Some(ref secret) = config.auth.jwt_secret {
        info!("JWT: HS256 verification enabled");
        JwtValidator::with_hs256(secret.as_bytes())
    } else if let Some(ref key_path) = config.auth.jwt_public_key_path {
        let config_dir = gs_config::Config::config_dir()?;
        let full_path = config_dir.join(key_path);
        let public_key =
            std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                path: full_path.display().to_string(),
                source: e,
            })?;
        info!("JWT: RS256 verification enabled");
        JwtValidator::with_rs256(&public_key)?
    } else {
        unreachable!("validate() ensures a JWT key source is configured")
    };

    // Build application state
    let app_state = AppState {
        pool,
        jwt_validator: Arc::new(jwt_validator),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");

    Ok(())
}
