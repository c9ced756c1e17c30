//! Application services

mod catalog;
mod expense;
mod user;

pub use catalog::CatalogService;
pub use expense::ExpenseService;
pub use user::{DefaultAdmin, UserService};
