//! Expense aggregate
//!
//! Expense records, the fixed currency set and the repository interface.

pub mod currency;
pub mod dto;
pub mod model;
pub mod repository;

pub use currency::Currency;
pub use dto::{CreateExpenseDto, GetExpensesDto, UpdateExpenseDto};
pub use model::{Expense, ExpenseWithLinks};
pub use repository::ExpenseRepository;
