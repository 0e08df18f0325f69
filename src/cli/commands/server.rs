use clap::Subcommand;
use serde_json::Value;

use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Check server health via the /api/health endpoint")]
    Ping {
        #[arg(long, help = "Server base URL (defaults to http://localhost:$PORT)")]
        url: Option<String>,
    },
}

pub async fn handle(cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Ping { url } => {
            let base = url.unwrap_or_else(default_base_url);
            let health_url = health_url(&base);

            let res = reqwest::Client::new().get(&health_url).send().await?;
            let status = res.status();
            let body: Value = res.json().await?;

            match output_format {
                OutputFormat::Json => println!("{}", body),
                OutputFormat::Text => println!(
                    "{} -> {} ({})",
                    health_url,
                    body.get("status").and_then(Value::as_str).unwrap_or("unknown"),
                    status
                ),
            }

            if !status.is_success() {
                anyhow::bail!("server at {} is not healthy ({})", base, status);
            }
            Ok(())
        }
    }
}

fn default_base_url() -> String {
    let _ = dotenvy::dotenv();
    format!("http://localhost:{}", crate::config::config().server.port)
}

fn health_url(base: &str) -> String {
    format!("{}/api/health", base.trim_end_matches('/'))
}
