//! Server: read settings, open the store, ensure the schema, serve until Ctrl-C, close the store.

use resource_hub::{apply_migrations, app, store, AppConfig, AppState, ConfigError, KanjiService};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| ConfigError::Load(format!("RUST_LOG: {}", e)))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let pool = store::connect(&config.database).await?;
    apply_migrations(&pool).await?;
    if config.seed_kanji {
        KanjiService::populate(&pool).await?;
    }

    let state = AppState::new(pool.clone());
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store::close(pool).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
