use anyhow::Context;
use tracing_subscriber::EnvFilter;
use user_crud::lifecycle::shutdown_signal;
use user_crud::{AppConfig, ConfigService, app, database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_service = ConfigService::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = AppConfig::from_service(&config_service).context("invalid configuration")?;
    tracing::info!("Starting user-crud ({:?} router)", config.router);

    let db = database::connect(&config)
        .await
        .context("failed to connect to the database")?;
    if config.auto_schema {
        database::ensure_schema(&db)
            .await
            .context("failed to create the users table")?;
    }

    let router = app(config.router, db.clone());

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Initiating graceful shutdown...");
        })
        .await
        .context("server error")?;

    if let Err(e) = db.close().await {
        tracing::error!("Error closing database pool: {}", e);
    }
    tracing::info!("Server stopped");
    Ok(())
}
