use clap::Subcommand;
use uuid::Uuid;

use crate::cli::OutputFormat;
use crate::database::models::{Project, ProjectSummary};
use crate::database::{ProjectRepository, ProjectStore};

#[derive(Subcommand)]
pub enum ProjectCommands {
    #[command(about = "List the most recently updated projects")]
    Recent {
        #[arg(long, short, default_value_t = 10, help = "Number of projects to show")]
        limit: i64,
    },

    #[command(about = "Show a single project")]
    Show {
        #[arg(help = "Project ID")]
        id: String,
    },
}

pub async fn handle(cmd: ProjectCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ProjectCommands::Recent { limit } => {
            if limit < 1 {
                anyhow::bail!("--limit must be at least 1");
            }
            let pool = super::connect().await?;
            let summaries = ProjectRepository::new(pool.clone()).recent(limit).await?;
            pool.close().await;

            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
                OutputFormat::Text => {
                    if summaries.is_empty() {
                        println!("No projects yet");
                    }
                    for summary in &summaries {
                        println!("{}", summary_line(summary));
                    }
                }
            }
            Ok(())
        }
        ProjectCommands::Show { id } => {
            let id = Uuid::parse_str(&id).map_err(|_| anyhow::anyhow!("Project not found: {}", id))?;
            let pool = super::connect().await?;
            let project = ProjectRepository::new(pool.clone()).find(id).await?;
            pool.close().await;

            let project = project.ok_or_else(|| anyhow::anyhow!("Project not found: {}", id))?;
            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&project)?),
                OutputFormat::Text => println!("{}", project_details(&project)),
            }
            Ok(())
        }
    }
}

fn summary_line(summary: &ProjectSummary) -> String {
    format!("{}  {}  ({})", summary.id, summary.title, summary.formatted_date())
}

fn project_details(project: &Project) -> String {
    let mut out = format!(
        "{}\nID: {}\nCreated: {}\nUpdated: {}\nPublic: {}\n",
        project.title,
        project.id,
        project.formatted_date(),
        project.updated_at.to_rfc3339(),
        project.is_public
    );
    if let Some(description) = &project.description {
        out.push_str(&format!("Description: {}\n", description));
    }
    for (label, code) in [
        ("HTML", &project.html_code),
        ("CSS", &project.css_code),
        ("JS", &project.js_code),
    ] {
        out.push_str(&format!("\n--- {} ---\n{}\n", label, code));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{NewProject, ProjectInput};
    use chrono::{TimeZone, Utc};

    fn project() -> Project {
        NewProject::from_input(ProjectInput {
            title: Some("Card layout".into()),
            description: Some("grid demo".into()),
            ..Default::default()
        })
        .unwrap()
        .into_project(Uuid::nil(), Utc.with_ymd_and_hms(2026, 3, 9, 12, 0, 0).unwrap())
    }

    #[test]
    fn summary_line_shows_short_date() {
        let line = summary_line(&project().summary());
        assert_eq!(
            line,
            "00000000-0000-0000-0000-000000000000  Card layout  (Mar 9, 2026)"
        );
    }

    #[test]
    fn details_include_every_pane() {
        let details = project_details(&project());
        assert!(details.starts_with("Card layout\n"));
        assert!(details.contains("Description: grid demo"));
        assert!(details.contains("--- HTML ---"));
        assert!(details.contains("--- CSS ---"));
        assert!(details.contains("--- JS ---"));
    }
}
