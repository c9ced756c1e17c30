use async_trait::async_trait;

use super::{CreateExpenseDto, Expense, ExpenseWithLinks, GetExpensesDto, UpdateExpenseDto};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn create(&self, dto: CreateExpenseDto) -> DomainResult<Expense>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Expense>>;
    /// Loads the expense with its user and expense type resolved.
    async fn find_with_links(&self, id: i32) -> DomainResult<Option<ExpenseWithLinks>>;
    async fn list(&self, dto: GetExpensesDto) -> DomainResult<PaginatedResult<Expense>>;
    async fn update(&self, id: i32, dto: UpdateExpenseDto) -> DomainResult<Option<Expense>>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
