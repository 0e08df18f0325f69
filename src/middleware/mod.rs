pub mod cors;
pub mod payload;
pub mod response;

pub use cors::cors_layer;
pub use payload::Payload;
pub use response::{ApiResponse, ApiResult};
