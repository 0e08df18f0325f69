use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

pub const DEFAULT_HTML_CODE: &str = "<!-- Write your HTML here -->\n<h1>Hello CodeCollab!</h1>";
pub const DEFAULT_CSS_CODE: &str =
    "/* Write your CSS here */\nbody {\n  font-family: Arial, sans-serif;\n  padding: 20px;\n}";
pub const DEFAULT_JS_CODE: &str =
    "// Write your JavaScript here\nconsole.log(\"CodeCollab is ready!\");";

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

pub const TITLE_REQUIRED: &str = "Please provide a project title";
pub const TITLE_TOO_LONG: &str = "Title cannot be more than 100 characters";
pub const DESCRIPTION_TOO_LONG: &str = "Description cannot be more than 500 characters";

/// A saved code playground: title, the three source panes and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub html_code: String,
    pub css_code: String,
    pub js_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creation date in short US form, e.g. "Oct 7, 2026"
    pub fn formatted_date(&self) -> String {
        short_date(&self.created_at)
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Listing projection without the source panes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectSummary {
    pub fn formatted_date(&self) -> String {
        short_date(&self.created_at)
    }
}

fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Request body shared by create and update. Every field is optional on the
/// wire; create and update apply different rules to absent values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub html_code: Option<String>,
    #[serde(default)]
    pub css_code: Option<String>,
    #[serde(default)]
    pub js_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectInput {
    /// True when the title is absent or only whitespace
    pub fn is_missing_title(&self) -> bool {
        self.title.as_deref().map_or(true, |t| trim(t).is_empty())
    }
}

/// Schema validation failure carrying one message per violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", .messages.join("; "))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

impl ValidationError {
    fn check(messages: Vec<String>) -> Result<(), ValidationError> {
        if messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { messages })
        }
    }
}

/// A validated project ready to be inserted. New projects are never public.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub html_code: String,
    pub css_code: String,
    pub js_code: String,
    pub description: Option<String>,
}

impl NewProject {
    /// Apply trimming and defaults, then validate.
    /// Empty code panes fall back to the starter templates and an empty
    /// description is left unset; a whitespace-only one is kept as "".
    pub fn from_input(input: ProjectInput) -> Result<Self, ValidationError> {
        let title = clean_text(input.title.as_deref().unwrap_or_default());
        let description = input
            .description
            .filter(|d| !d.is_empty())
            .map(|d| clean_text(&d));

        let mut messages = Vec::new();
        validate_title(&title, &mut messages);
        if let Some(d) = &description {
            validate_description(d, &mut messages);
        }
        ValidationError::check(messages)?;

        Ok(Self {
            title,
            html_code: or_default(input.html_code, DEFAULT_HTML_CODE),
            css_code: or_default(input.css_code, DEFAULT_CSS_CODE),
            js_code: or_default(input.js_code, DEFAULT_JS_CODE),
            description,
        })
    }

    /// Materialise the record as the store will persist it
    pub fn into_project(self, id: Uuid, now: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            html_code: self.html_code,
            css_code: self.css_code,
            js_code: self.js_code,
            description: self.description,
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub html_code: Option<String>,
    pub css_code: Option<String>,
    pub js_code: Option<String>,
    pub description: Option<String>,
}

impl ProjectChanges {
    pub fn from_input(input: ProjectInput) -> Result<Self, ValidationError> {
        let title = input.title.map(|t| clean_text(&t));
        let description = input.description.map(|d| clean_text(&d));

        let mut messages = Vec::new();
        if let Some(t) = &title {
            validate_title(t, &mut messages);
        }
        if let Some(d) = &description {
            validate_description(d, &mut messages);
        }
        ValidationError::check(messages)?;

        Ok(Self {
            title,
            html_code: input.html_code.map(strip_nul),
            css_code: input.css_code.map(strip_nul),
            js_code: input.js_code.map(strip_nul),
            description,
        })
    }

    /// Overwrite the provided fields and bump `updated_at`
    pub fn apply_to(&self, project: &mut Project, now: DateTime<Utc>) {
        if let Some(v) = &self.title {
            project.title = v.clone();
        }
        if let Some(v) = &self.html_code {
            project.html_code = v.clone();
        }
        if let Some(v) = &self.css_code {
            project.css_code = v.clone();
        }
        if let Some(v) = &self.js_code {
            project.js_code = v.clone();
        }
        if let Some(v) = &self.description {
            project.description = Some(v.clone());
        }
        project.updated_at = now;
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(strip_nul)
        .unwrap_or_else(|| default.to_string())
}

/// Whitespace trim that also drops the byte order mark
fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

// Postgres TEXT cannot hold NUL
fn strip_nul(value: String) -> String {
    if value.contains('\0') {
        value.replace('\0', "")
    } else {
        value
    }
}

fn clean_text(value: &str) -> String {
    strip_nul(trim(value).to_string())
}

fn validate_title(title: &str, messages: &mut Vec<String>) {
    if title.is_empty() {
        messages.push(TITLE_REQUIRED.to_string());
    } else if title.chars().count() > TITLE_MAX_CHARS {
        messages.push(TITLE_TOO_LONG.to_string());
    }
}

fn validate_description(description: &str, messages: &mut Vec<String>) {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        messages.push(DESCRIPTION_TOO_LONG.to_string());
    }
}
