//! Repository traits for the domain layer
//!
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `SearchQuery`: free-text search + pagination used by the catalog lists
//! - `DomainResult`: standard result type for domain operations

use super::expense::ExpenseRepository;
use super::expense_type::ExpenseTypeRepository;
use super::role::RoleRepository;
use super::user::UserRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) -> DomainResult<()> {
///     let role = repos.roles().find_by_name("Employee").await?;
///     let page = repos.expenses().list(GetExpensesDto::default()).await?;
///     Ok(())
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn roles(&self) -> &dyn RoleRepository;
    fn users(&self) -> &dyn UserRepository;
    fn expense_types(&self) -> &dyn ExpenseTypeRepository;
    fn expenses(&self) -> &dyn ExpenseRepository;
}

/// Search + pagination for simple catalog tables (roles, expense types)
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}
