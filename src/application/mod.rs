//! Application layer
//!
//! Use-case services over the repository traits. Validation, referential
//! checks and password hashing happen here before anything is persisted.

pub mod services;

pub use services::{CatalogService, DefaultAdmin, ExpenseService, UserService};
