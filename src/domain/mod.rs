//! Domain layer
//!
//! Plain entity models, DTOs and per-aggregate repository interfaces.
//! Nothing in here knows about SeaORM or HTTP.

pub mod expense;
pub mod expense_type;
pub mod repositories;
pub mod role;
pub mod user;

pub use expense::{
    CreateExpenseDto, Currency, Expense, ExpenseRepository, ExpenseWithLinks, GetExpensesDto,
    UpdateExpenseDto,
};
pub use expense_type::{
    CreateExpenseTypeDto, ExpenseType, ExpenseTypeRepository, UpdateExpenseTypeDto,
};
pub use repositories::{DomainResult, RepositoryProvider, SearchQuery};
pub use role::{CreateRoleDto, Role, RoleRepository, UpdateRoleDto};
pub use user::{CreateUserDto, GetUserDto, UpdateUserDto, User, UserRepository};

pub use crate::shared::errors::DomainError;
