use std::sync::Arc;

use anyhow::Context;
use codecollab_api::config;
use codecollab_api::database::{DatabaseManager, ProjectRepository};
use codecollab_api::{app, logging, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    logging::init();

    let config = config::config();
    tracing::info!("Starting CodeCollab API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    DatabaseManager::migrate(&pool)
        .await
        .context("failed to prepare database schema")?;

    let state = AppState::new(
        Arc::new(ProjectRepository::new(pool.clone())),
        config.query.clone(),
    );

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Server is running on http://{}", bind_addr);
    tracing::info!("Projects API: http://{}/api/projects", bind_addr);

    axum::serve(listener, app(state, config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
