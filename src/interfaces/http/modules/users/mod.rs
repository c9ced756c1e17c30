//! Users module: user CRUD plus the write-only password endpoints

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
