pub mod manager;
pub mod memory;
pub mod models;
pub mod repository;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::InMemoryProjectStore;
pub use repository::ProjectRepository;
pub use store::ProjectStore;
