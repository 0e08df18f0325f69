pub mod project;

pub use project::{
    NewProject, Project, ProjectChanges, ProjectInput, ProjectSummary, ValidationError,
};
