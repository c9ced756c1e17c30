//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod expense_repository;
pub mod expense_type_repository;
pub mod repository_provider;
pub mod role_repository;
pub mod user_repository;

pub use expense_repository::SeaOrmExpenseRepository;
pub use expense_type_repository::SeaOrmExpenseTypeRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use role_repository::SeaOrmRoleRepository;
pub use user_repository::SeaOrmUserRepository;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

/// Map a failed insert/update to a domain error: unique violations become
/// conflicts, dangling references become validation errors.
pub(crate) fn write_err(entity: &'static str, e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            DomainError::Conflict(format!("{} already exists ({})", entity, detail))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            DomainError::Validation(format!("{} references a missing row ({})", entity, detail))
        }
        _ => e.into(),
    }
}

/// Empty or whitespace-only optional text is stored as NULL.
pub(crate) fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
