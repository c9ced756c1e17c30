//! Database entities module

pub mod expense;
pub mod expense_type;
pub mod role;
pub mod user;

pub use expense::Entity as Expense;
pub use expense_type::Entity as ExpenseType;
pub use role::Entity as Role;
pub use user::Entity as User;
