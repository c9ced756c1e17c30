//! ExpenseType aggregate
//!
//! Category labels for grouping expenses (e.g. "Travel").

pub mod dto;
pub mod model;
pub mod repository;

pub use dto::{CreateExpenseTypeDto, UpdateExpenseTypeDto};
pub use model::ExpenseType;
pub use repository::ExpenseTypeRepository;
