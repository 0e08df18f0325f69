#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use codecollab_api::config::AppConfig;
use codecollab_api::database::{DatabaseManager, InMemoryProjectStore, ProjectRepository};
use codecollab_api::{app, AppState};

// Test threads share one database; schema creation is not safe to race.
static MIGRATED: once_cell::sync::Lazy<tokio::sync::Mutex<bool>> =
    once_cell::sync::Lazy::new(|| tokio::sync::Mutex::new(false));

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub store: Arc<InMemoryProjectStore>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serve the full router on a free port, backed by a fresh in-memory store.
/// The server lives as long as the calling test's runtime.
pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(AppConfig::development()).await
}

pub async fn spawn_server_with(mut config: AppConfig) -> Result<TestServer> {
    config.api.enable_request_logging = false;

    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind {}", base_url))?;

    let store = Arc::new(InMemoryProjectStore::new());
    let state = AppState::new(store.clone(), config.query.clone());
    let router = app(state, &config);

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let server = TestServer { port, base_url, store };
    wait_ready(&server, Duration::from_secs(5)).await?;
    Ok(server)
}

async fn wait_ready(server: &TestServer, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::new();
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if client.get(server.url("/api/health")).send().await.is_ok() {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    anyhow::bail!("server did not become ready on {} within {:?}", server.base_url, timeout)
}

/// Repository over the migrated database named by `DATABASE_URL`, or `None`
/// when the run has no database.
pub async fn postgres_store() -> Result<Option<ProjectRepository>> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => return Ok(None),
    };

    let mut config = AppConfig::development().database;
    config.url = url;
    config.max_connections = 2;
    let pool = DatabaseManager::connect(&config)
        .await
        .context("failed to connect to DATABASE_URL")?;

    let mut migrated = MIGRATED.lock().await;
    if !*migrated {
        DatabaseManager::migrate(&pool).await?;
        *migrated = true;
    }
    drop(migrated);

    Ok(Some(ProjectRepository::new(pool)))
}
