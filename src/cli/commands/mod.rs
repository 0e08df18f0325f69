pub mod db;
pub mod project;
pub mod server;

use sqlx::PgPool;

use crate::database::DatabaseManager;

/// Connect using the same environment configuration as the server
pub(crate) async fn connect() -> anyhow::Result<PgPool> {
    let _ = dotenvy::dotenv();
    let config = crate::config::config();
    Ok(DatabaseManager::connect(&config.database).await?)
}
