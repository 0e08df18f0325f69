use clap::Subcommand;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::database::DatabaseManager;

#[derive(Subcommand)]
pub enum DbCommands {
    #[command(about = "Create the projects table and indexes if missing")]
    Migrate,

    #[command(about = "Check database connectivity")]
    Status,
}

pub async fn handle(cmd: DbCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = super::connect().await?;

    match cmd {
        DbCommands::Migrate => {
            DatabaseManager::migrate(&pool).await?;
            match output_format {
                OutputFormat::Json => println!("{}", json!({ "success": true, "migrated": true })),
                OutputFormat::Text => println!("Database schema is up to date"),
            }
        }
        DbCommands::Status => {
            DatabaseManager::health_check(&pool).await?;
            match output_format {
                OutputFormat::Json => println!("{}", json!({ "success": true, "database": "ok" })),
                OutputFormat::Text => println!("Database: ok"),
            }
        }
    }

    pool.close().await;
    Ok(())
}
