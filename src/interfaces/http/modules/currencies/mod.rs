//! Currencies module: the fixed set of expense currencies

pub mod handlers;

pub use handlers::*;
