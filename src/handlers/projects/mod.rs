// handlers/projects - CRUD endpoints for /api/projects
//
// collection.rs serves the list-level routes (list, recent, create),
// record.rs the routes addressed by project id (get, update, delete).

pub mod collection;
pub mod record;

use uuid::Uuid;

use crate::error::ApiError;

pub use collection::{create, list, recent};
pub use record::{delete, get, update};

/// Parse a path id. Malformed ids cannot name a project, so they are
/// reported as not found rather than as a bad request.
pub(crate) fn parse_project_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::project_not_found())
}
