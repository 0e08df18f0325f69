// handlers/mod.rs - HTTP handlers
//
// projects: the /api/projects CRUD surface
// system:   root banner, health probe and the unmatched-route fallback

pub mod projects;
pub mod system;
