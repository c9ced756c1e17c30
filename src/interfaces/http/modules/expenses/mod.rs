//! Expenses module: expense CRUD with linked user / expense type lookups

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
