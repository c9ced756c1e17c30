//! Roles and expense types
//!
//! Both are small lookup tables; this service validates lengths and turns
//! duplicate role names into conflicts before the insert.

use std::sync::Arc;

use validator::Validate;

use crate::domain::{
    CreateExpenseTypeDto, CreateRoleDto, DomainError, DomainResult, ExpenseType,
    RepositoryProvider, Role, SearchQuery, UpdateExpenseTypeDto, UpdateRoleDto,
};
use crate::shared::PaginatedResult;

pub struct CatalogService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CatalogService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Roles ───────────────────────────────────────────────────

    pub async fn create_role(&self, dto: CreateRoleDto) -> DomainResult<Role> {
        dto.validate()?;
        if self.repos.roles().find_by_name(&dto.name).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Role '{}' already exists",
                dto.name
            )));
        }
        self.repos.roles().create(dto).await
    }

    pub async fn get_role(&self, id: i32) -> DomainResult<Role> {
        self.repos
            .roles()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Role", id))
    }

    pub async fn list_roles(&self, query: SearchQuery) -> DomainResult<PaginatedResult<Role>> {
        self.repos.roles().list(query).await
    }

    pub async fn update_role(&self, id: i32, dto: UpdateRoleDto) -> DomainResult<Role> {
        dto.validate()?;
        if let Some(ref name) = dto.name {
            if let Some(other) = self.repos.roles().find_by_name(name).await? {
                if other.id != id {
                    return Err(DomainError::Conflict(format!(
                        "Role '{}' already exists",
                        name
                    )));
                }
            }
        }
        self.repos
            .roles()
            .update(id, dto)
            .await?
            .ok_or_else(|| DomainError::not_found("Role", id))
    }

    /// Cascades to the role's users and their expenses.
    pub async fn delete_role(&self, id: i32) -> DomainResult<()> {
        self.repos.roles().delete(id).await
    }

    // ── Expense types ───────────────────────────────────────────

    pub async fn create_expense_type(&self, dto: CreateExpenseTypeDto) -> DomainResult<ExpenseType> {
        dto.validate()?;
        self.repos.expense_types().create(dto).await
    }

    pub async fn get_expense_type(&self, id: i32) -> DomainResult<ExpenseType> {
        self.repos
            .expense_types()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("ExpenseType", id))
    }

    pub async fn list_expense_types(
        &self,
        query: SearchQuery,
    ) -> DomainResult<PaginatedResult<ExpenseType>> {
        self.repos.expense_types().list(query).await
    }

    pub async fn update_expense_type(
        &self,
        id: i32,
        dto: UpdateExpenseTypeDto,
    ) -> DomainResult<ExpenseType> {
        dto.validate()?;
        self.repos
            .expense_types()
            .update(id, dto)
            .await?
            .ok_or_else(|| DomainError::not_found("ExpenseType", id))
    }

    /// Cascades to every expense filed under the type.
    pub async fn delete_expense_type(&self, id: i32) -> DomainResult<()> {
        self.repos.expense_types().delete(id).await
    }
}
